pub type Vector3 = cgmath::Vector3<f32>;

/// An RGB triple, nominally in `[0, 1]` per channel.
pub type Color = [f32; 3];

pub const ZERO: Vector3 = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 0.0,
};

/// A single renderable triangle.
///
/// The three corners are stored by value in winding order. `normal` is either
/// exactly the zero vector, meaning no orientation has been established yet,
/// or a unit vector that agrees with the `p0, p1, p2` winding.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
    pub normal: Vector3,
    pub roughness: f32,
    pub metallic: f32,
    pub emission: f32,
    pub color: Color,
    /// Traces this triangle back to the face it was cut from.
    pub face_index: u32,
}

impl Triangle {
    /// Creates a triangle with a normal derived from the winding of the given
    /// points and all shading attributes zeroed.
    pub fn from_points(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self {
            p0,
            p1,
            p2,
            normal: crate::triangle_normal(p0, p1, p2),
            ..Default::default()
        }
    }

    /// Area of the triangle, measured in 3D.
    pub fn area(&self) -> f32 {
        use cgmath::InnerSpace;
        (self.p1 - self.p0).cross(self.p2 - self.p0).magnitude() / 2.0
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        Self {
            p0: ZERO,
            p1: ZERO,
            p2: ZERO,
            normal: ZERO,
            roughness: 0.0,
            metallic: 0.0,
            emission: 0.0,
            color: [0.0; 3],
            face_index: 0,
        }
    }
}

/// A polygon record from a mesh description.
///
/// `vertices` holds 0-based positions into the vertex list the face was read
/// alongside. Positions are not guaranteed to be in range; consumers must
/// check before indexing.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Face {
    pub vertices: Vec<usize>,
    /// Name of the material active when the face was declared, if any.
    pub material: Option<String>,
}

impl Face {
    pub fn new(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            material: None,
        }
    }

    pub fn with_material<S: Into<String>>(mut self, name: S) -> Self {
        self.material = Some(name.into());
        self
    }
}
