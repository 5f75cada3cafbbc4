//! Material types read from `.mtl` libraries
//!
//! The full set of properties is modeled, but the loader only fills in
//! [`Material::name`]; every other field keeps its default.

/// An RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Create a new color
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Texture map slots of a material, each holding the referenced image path
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialMaps {
    /// `map_Ka`
    pub ambient: Option<String>,
    /// `map_Kd`
    pub diffuse: Option<String>,
    /// `map_Ks`
    pub specular: Option<String>,
    /// `map_Ns`
    pub shininess: Option<String>,
    /// `map_d`
    pub dissolve: Option<String>,
    /// `map_bump` / `bump`
    pub bump: Option<String>,
    /// `decal`
    pub decal: Option<String>,
}

/// A material declared by `newmtl`
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name
    pub name: String,
    /// Ambient color (`Ka`)
    pub ambient: Color,
    /// Diffuse color (`Kd`)
    pub diffuse: Color,
    /// Specular color (`Ks`)
    pub specular: Color,
    /// Emissive color (`Ke`)
    pub emissive: Color,
    /// Transmission filter color (`Tf`)
    pub transmission_filter: Color,
    /// Specular exponent (`Ns`)
    pub shininess: f32,
    /// Reflection sharpness (`sharpness`)
    pub sharpness: f32,
    /// Index of refraction (`Ni`)
    pub optical_density: f32,
    /// Opacity (`d`); `1 - Tr`
    pub dissolve: f32,
    /// Illumination model (`illum`)
    pub illumination_model: u32,
    /// Texture maps
    pub maps: MaterialMaps,
}

impl Material {
    /// Create a new material with only its name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient: Color::default(),
            diffuse: Color::default(),
            specular: Color::default(),
            emissive: Color::default(),
            transmission_filter: Color::default(),
            shininess: 0.0,
            sharpness: 60.0,
            optical_density: 1.0,
            dissolve: 1.0,
            illumination_model: 0,
            maps: MaterialMaps::default(),
        }
    }
}
