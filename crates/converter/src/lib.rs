mod assemble;
mod config;
mod material;
mod triangulate;
mod winding;

pub use assemble::*;
pub use config::*;
pub use material::*;
pub use triangulate::*;
pub use winding::*;

use trisoup_mesh::{Face, MeshBuffer, TriangleMesh, Vector3};

/// The result of converting a polygon mesh into a triangle soup.
pub struct Conversion {
    pub mesh: MeshBuffer,
    /// Number of triangles whose winding had to be reversed.
    pub flipped: usize,
}

/// Assembles `faces` into triangles and normalizes their winding.
pub fn convert(
    vertices: &[Vector3],
    faces: &[Face],
    library: &MaterialLibrary,
    config: &AssemblerConfig,
) -> Conversion {
    let assembler = MeshAssembler::new(config.clone());
    let mut mesh = assembler.assemble(vertices, faces, library);

    let flipped = ensure_consistent_winding(mesh.triangles_mut());
    if flipped > 0 {
        log::info!("fixed winding order for {} triangles", flipped);
    }
    log::debug!(
        "{} faces became {} triangles",
        faces.len(),
        mesh.triangle_count()
    );

    Conversion { mesh, flipped }
}
