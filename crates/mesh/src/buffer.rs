use crate::{geometry::Triangle, TriangleMesh};

/// A flat triangle soup.
///
/// Every triangle stores its corners by value, so shared vertices are
/// duplicated. This is the layout the binary writer consumes directly.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeshBuffer {
    triangles: Vec<Triangle>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle)
    }

    pub fn triangles_mut(&mut self) -> &mut [Triangle] {
        self.triangles.as_mut_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Sum of the areas of every triangle in the buffer.
    pub fn area(&self) -> f32 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    pub fn into_inner(self) -> Vec<Triangle> {
        let MeshBuffer { triangles } = self;
        triangles
    }
}

impl TriangleMesh for MeshBuffer {
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    fn as_triangle_slice(&self) -> &[Triangle] {
        self.triangles.as_slice()
    }
}

impl FromIterator<Triangle> for MeshBuffer {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter.into_iter().collect())
    }
}

impl Extend<Triangle> for MeshBuffer {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter)
    }
}
