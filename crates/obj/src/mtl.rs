use std::io::BufRead;
use std::path::Path;

use trisoup_mesh::{Color, Material};

use crate::for_each_statement;

/// Numbers that fail to parse read as zero.
fn scalar(token: &str) -> f32 {
    token.parse().unwrap_or(0.0)
}

fn color(tokens: &[&str]) -> Option<Color> {
    match tokens {
        [r, g, b] => Some([scalar(r), scalar(g), scalar(b)]),
        _ => None,
    }
}

fn read_mtl_statements<R: BufRead>(r: &mut R) -> std::io::Result<Vec<Material>> {
    let mut materials = Vec::new();
    let mut current: Option<Material> = None;

    for_each_statement(r, |tokens| {
        if let ["newmtl", name, ..] = tokens {
            materials.extend(current.replace(Material::new(*name)));
            return;
        }
        // Anything before the first newmtl has nothing to attach to.
        let Some(m) = current.as_mut() else {
            return;
        };
        match tokens {
            ["Kd", rgb @ ..] => m.diffuse = color(rgb).unwrap_or(m.diffuse),
            ["Ks", rgb @ ..] => m.specular = color(rgb).unwrap_or(m.specular),
            ["Ke", rgb @ ..] => m.emissive = color(rgb).unwrap_or(m.emissive),
            ["Ns", v] => m.shininess = scalar(v),
            ["Ni", v] => m.refractive_index = scalar(v),
            ["d", v] => m.dissolve = scalar(v),
            ["illum", v] => m.illumination = scalar(v) as i32,
            _ => (),
        }
    })?;

    materials.extend(current);
    Ok(materials)
}

pub fn read_mtl<P: AsRef<Path>>(p: P) -> std::io::Result<Vec<Material>> {
    let f = std::fs::File::open(p)?;
    read_mtl_statements(&mut std::io::BufReader::new(f))
}

pub fn parse_mtl(data: &[u8]) -> std::io::Result<Vec<Material>> {
    let mut c = std::io::Cursor::new(data);
    read_mtl_statements(&mut c)
}

pub trait MtlReader: BufRead {
    fn read_mtl(&mut self) -> std::io::Result<Vec<Material>>;
}

impl<T: BufRead> MtlReader for T {
    fn read_mtl(&mut self) -> std::io::Result<Vec<Material>> {
        read_mtl_statements(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_material() {
        let data = b"newmtl shiny\n\
                     Kd 0.1 0.2 0.3\n\
                     Ks 0.4 0.5 0.6\n\
                     Ke 0.7 0.8 0.9\n\
                     Ns 96.07\n\
                     Ni 1.5\n\
                     d 0.25\n\
                     illum 2\n";
        let materials = parse_mtl(data).unwrap();
        assert_eq!(
            vec![Material {
                name: "shiny".to_string(),
                diffuse: [0.1, 0.2, 0.3],
                specular: [0.4, 0.5, 0.6],
                emissive: [0.7, 0.8, 0.9],
                shininess: 96.07,
                refractive_index: 1.5,
                dissolve: 0.25,
                illumination: 2,
            }],
            materials
        );
    }

    #[test]
    fn materials_in_order() {
        let data = b"newmtl a\nKd 1 0 0\nnewmtl b\nKd 0 1 0\nnewmtl c\n";
        let names: Vec<String> = parse_mtl(data).unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(vec!["a", "b", "c"], names);
    }

    #[test]
    fn malformed_statements() {
        let data = b"Kd 1 1 1\n\
                     newmtl\n\
                     newmtl m\n\
                     Kd 0.5 0.5\n\
                     Ks x 1 1\n\
                     Ns 1 2\n\
                     illum 3.7\n";
        let materials = parse_mtl(data).unwrap();
        assert_eq!(1, materials.len());
        let m = &materials[0];
        assert_eq!([0.0, 0.0, 0.0], m.diffuse);
        assert_eq!([0.0, 1.0, 1.0], m.specular);
        assert_eq!(0.0, m.shininess);
        assert_eq!(3, m.illumination);
    }

    #[test]
    fn empty_library() {
        assert!(parse_mtl(b"# nothing here\n").unwrap().is_empty());
    }
}
