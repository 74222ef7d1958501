mod buffer;
mod geometry;
mod material;
mod primitives;

pub use buffer::*;
pub use geometry::*;
pub use material::*;
pub use primitives::*;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a list of triangles.
    ///
    /// # Arguments
    ///
    /// * `triangles` - A vector of the triangles of the mesh.
    fn from_triangles(triangles: Vec<Triangle>) -> Self;

    /// Returns the triangles of the mesh as a contiguous slice.
    fn as_triangle_slice(&self) -> &[Triangle];

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize {
        self.as_triangle_slice().len()
    }

    /// Iterates the triangles of the mesh in order.
    fn triangles(&self) -> std::iter::Copied<std::slice::Iter<'_, Triangle>> {
        self.as_triangle_slice().iter().copied()
    }
}
