use std::io::BufRead;
use std::path::Path;

use trisoup_mesh::{Face, Vector3};

use crate::for_each_statement;

/// The geometry of an OBJ file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ObjModel {
    pub vertices: Vec<Vector3>,
    /// Faces in file order, with 0-based vertex positions.
    pub faces: Vec<Face>,
}

/// Resolves an OBJ vertex reference against the `count` vertices read so far.
///
/// Positive references are 1-based; negative ones count back from the most
/// recent vertex. Zero, or a negative reference that reaches before the
/// first vertex, cannot be resolved. Positive references are not checked
/// against `count`.
pub fn resolve_index(index: i64, count: usize) -> Option<usize> {
    if index > 0 {
        usize::try_from(index - 1).ok()
    } else if index < 0 {
        usize::try_from(count as i64 + index).ok()
    } else {
        None
    }
}

fn parse_vertex(tokens: &[&str]) -> Option<Vector3> {
    match tokens {
        [x, y, z, ..] => Some(Vector3 {
            x: x.parse().ok()?,
            y: y.parse().ok()?,
            z: z.parse().ok()?,
        }),
        _ => None,
    }
}

/// Parses the vertex references of an `f` statement.
///
/// Each token may be `v`, `v/vt`, `v//vn` or `v/vt/vn`; only `v` is used.
/// Tokens whose vertex part is not an integer are ignored.
fn parse_face(tokens: &[&str], count: usize) -> Option<Vec<usize>> {
    let mut vertices = Vec::with_capacity(tokens.len());
    for token in tokens {
        let Some(Ok(index)) = token.split('/').next().map(str::parse::<i64>) else {
            continue;
        };
        vertices.push(resolve_index(index, count)?);
    }
    Some(vertices)
}

fn read_obj_statements<R: BufRead>(r: &mut R) -> std::io::Result<ObjModel> {
    let mut model = ObjModel::default();
    let mut material: Option<String> = None;

    for_each_statement(r, |tokens| match tokens {
        ["v", coords @ ..] => match parse_vertex(coords) {
            Some(v) => model.vertices.push(v),
            None => log::debug!("skipping malformed vertex: {}", tokens.join(" ")),
        },
        ["usemtl", name, ..] => material = Some(name.to_string()),
        ["f", refs @ ..] => match parse_face(refs, model.vertices.len()) {
            Some(vertices) => model.faces.push(Face {
                vertices,
                material: material.clone(),
            }),
            None => log::debug!("skipping face with unresolvable vertex: {}", tokens.join(" ")),
        },
        // Texture coordinates, normals, groups and the like carry nothing we
        // need.
        _ => (),
    })?;

    Ok(model)
}

pub fn read_obj<P: AsRef<Path>>(p: P) -> std::io::Result<ObjModel> {
    let f = std::fs::File::open(p)?;
    read_obj_statements(&mut std::io::BufReader::new(f))
}

pub fn parse_obj(data: &[u8]) -> std::io::Result<ObjModel> {
    let mut c = std::io::Cursor::new(data);
    read_obj_statements(&mut c)
}

pub trait ObjReader: BufRead {
    fn read_obj(&mut self) -> std::io::Result<ObjModel>;
}

impl<T: BufRead> ObjReader for T {
    fn read_obj(&mut self) -> std::io::Result<ObjModel> {
        read_obj_statements(self)
    }
}
