use crate::material::SurfaceMaterial;

#[derive(Debug, Clone, Default)]
pub struct AssemblerConfig {
    /// Shading applied to faces whose material cannot be resolved.
    pub default_material: SurfaceMaterial,
}
