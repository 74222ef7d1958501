use anyhow::Context;
use trisoup::{convert, AssemblerConfig, MaterialLibrary};
use trisoup_mesh::TriangleMesh;

use crate::args::Args;

/// Loads the material library for the input mesh.
///
/// A missing or unreadable library is not fatal; every face then gets the
/// default material.
fn load_materials(args: &Args) -> MaterialLibrary {
    let path = args
        .materials
        .clone()
        .unwrap_or_else(|| trisoup_obj::material_path(&args.input));
    match trisoup_obj::read_mtl(&path) {
        Ok(materials) => {
            let library = MaterialLibrary::from_materials(&materials);
            if !library.is_empty() {
                log::info!("found {} materials in {}", library.len(), path.display());
            }
            library
        }
        Err(e) => {
            log::warn!("could not load materials from {}: {}", path.display(), e);
            MaterialLibrary::new()
        }
    }
}

/// Converts the mesh named in `args` and returns the number of triangles
/// written.
pub fn convert_command(args: &Args) -> anyhow::Result<usize> {
    let model = trisoup_obj::read_obj(&args.input)
        .with_context(|| format!("failed to read mesh {}", args.input.display()))?;
    let library = load_materials(args);

    let conversion = convert(
        &model.vertices,
        &model.faces,
        &library,
        &AssemblerConfig::default(),
    );
    log::info!("loaded {} triangles", conversion.mesh.triangle_count());

    trisoup_soup::write_soup_file(&args.output, &conversion.mesh, args.color)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(conversion.mesh.triangle_count())
}
