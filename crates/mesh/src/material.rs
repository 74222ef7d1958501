use crate::geometry::Color;

/// A material record as declared in a material library.
///
/// Only `name` and `diffuse` influence the triangles that are produced; the
/// remaining fields are carried so the record is complete.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Material {
    pub name: String,
    /// `Kd`
    pub diffuse: Color,
    /// `Ks`
    pub specular: Color,
    /// `Ke`
    pub emissive: Color,
    /// `Ns`
    pub shininess: f32,
    /// `Ni`
    pub refractive_index: f32,
    /// `d`
    pub dissolve: f32,
    /// `illum`
    pub illumination: i32,
}

impl Material {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
