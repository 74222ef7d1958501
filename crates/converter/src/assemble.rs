use trisoup_mesh::{Face, MeshBuffer, Triangle, Vector3};

use crate::config::AssemblerConfig;
use crate::material::{MaterialLibrary, SurfaceMaterial};
use crate::triangulate::{EarClipping, Triangulator};

/// Builds a triangle soup out of polygon faces.
pub struct MeshAssembler<T = EarClipping> {
    triangulator: T,
    config: AssemblerConfig,
}

impl MeshAssembler<EarClipping> {
    pub fn new(config: AssemblerConfig) -> Self {
        Self::with_triangulator(EarClipping, config)
    }
}

impl Default for MeshAssembler<EarClipping> {
    fn default() -> Self {
        Self::new(AssemblerConfig::default())
    }
}

/// Looks up the points of a face, or `None` if any position is out of range.
fn gather(vertices: &[Vector3], positions: &[usize]) -> Option<Vec<Vector3>> {
    positions.iter().map(|&i| vertices.get(i).copied()).collect()
}

fn shade(t: &mut Triangle, material: &SurfaceMaterial) {
    t.roughness = material.roughness;
    t.metallic = material.metallic;
    t.emission = material.emission;
    t.color = material.color;
}

impl<T: Triangulator> MeshAssembler<T> {
    pub fn with_triangulator(triangulator: T, config: AssemblerConfig) -> Self {
        Self {
            triangulator,
            config,
        }
    }

    /// Converts `faces` into triangles.
    ///
    /// Faces with fewer than 3 points, or that reference a position outside
    /// `vertices`, are skipped. Triangles are numbered sequentially from 0 in
    /// the order they are emitted, so a face split into several triangles
    /// uses several consecutive indices. Assembly stops once the `u32` index
    /// space is used up.
    pub fn assemble(
        &self,
        vertices: &[Vector3],
        faces: &[Face],
        library: &MaterialLibrary,
    ) -> MeshBuffer {
        self.assemble_from(vertices, faces, library, 0)
    }

    fn assemble_from(
        &self,
        vertices: &[Vector3],
        faces: &[Face],
        library: &MaterialLibrary,
        first_index: u32,
    ) -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        let mut face_index = Some(first_index);

        for (n, face) in faces.iter().enumerate() {
            let material = library
                .resolve(face.material.as_deref())
                .or(&self.config.default_material);

            let Some(points) = gather(vertices, &face.vertices) else {
                log::debug!("skipping face {}: vertex position out of range", n);
                continue;
            };

            let triangles = match points.len() {
                0..=2 => {
                    log::debug!("skipping face {}: only {} vertices", n, points.len());
                    continue;
                }
                3 => vec![Triangle::from_points(points[0], points[1], points[2])],
                _ => self.triangulator.triangulate(&points),
            };

            for mut t in triangles {
                let Some(index) = face_index else {
                    log::debug!("face index space exhausted at face {}, stopping", n);
                    return mesh;
                };
                shade(&mut t, material);
                t.face_index = index;
                face_index = index.checked_add(1);
                mesh.push(t);
            }
        }

        mesh
    }
}
