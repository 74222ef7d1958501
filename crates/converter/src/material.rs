use std::collections::HashMap;

use trisoup_mesh::{Color, Material};

/// Shading attributes copied onto every triangle of a face.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMaterial {
    pub name: String,
    pub roughness: f32,
    pub metallic: f32,
    pub emission: f32,
    pub color: Color,
}

impl SurfaceMaterial {
    // Parsed materials do not drive these; every library material gets the
    // same values and only keeps its diffuse color.
    const LIBRARY_ROUGHNESS: f32 = 0.99;
    const LIBRARY_METALLIC: f32 = 0.01;
    const LIBRARY_EMISSION: f32 = 0.0;

    pub fn from_material(material: &Material) -> Self {
        Self {
            name: material.name.clone(),
            roughness: Self::LIBRARY_ROUGHNESS,
            metallic: Self::LIBRARY_METALLIC,
            emission: Self::LIBRARY_EMISSION,
            color: material.diffuse,
        }
    }
}

impl Default for SurfaceMaterial {
    /// The material used for faces with no (or an unknown) material name.
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            roughness: 0.5,
            metallic: 0.5,
            emission: 0.5,
            color: [0.8, 0.8, 0.8],
        }
    }
}

/// The outcome of looking up a face's material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceMaterial<'a> {
    Resolved(&'a SurfaceMaterial),
    Default,
}

impl<'a> FaceMaterial<'a> {
    /// Picks the material to shade with, falling back to `default`.
    pub fn or<'b>(self, default: &'b SurfaceMaterial) -> &'b SurfaceMaterial
    where
        'a: 'b,
    {
        match self {
            FaceMaterial::Resolved(material) => material,
            FaceMaterial::Default => default,
        }
    }
}

/// Materials available to a single conversion, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct MaterialLibrary {
    materials: HashMap<String, SurfaceMaterial>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a library from parsed material records.
    ///
    /// Later records replace earlier ones with the same name.
    pub fn from_materials<'m, I: IntoIterator<Item = &'m Material>>(materials: I) -> Self {
        let mut library = Self::new();
        for m in materials {
            library.insert(SurfaceMaterial::from_material(m));
        }
        library
    }

    pub fn insert(&mut self, material: SurfaceMaterial) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Resolves an optional material name.
    ///
    /// Absent or empty names and names missing from the library all resolve
    /// to `FaceMaterial::Default`.
    pub fn resolve(&self, name: Option<&str>) -> FaceMaterial<'_> {
        match name.filter(|n| !n.is_empty()).and_then(|n| self.materials.get(n)) {
            Some(material) => FaceMaterial::Resolved(material),
            None => FaceMaterial::Default,
        }
    }
}
