use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Phong light and material colours plus the light orbit.
pub struct LightingOptions {
    /// Light ambient colour.
    #[schemars(skip)]
    pub light_ambient: [f32; 3],
    /// Light diffuse colour.
    #[schemars(skip)]
    pub light_diffuse: [f32; 3],
    /// Light specular colour.
    #[schemars(skip)]
    pub light_specular: [f32; 3],
    /// Material ambient reflectance.
    #[schemars(skip)]
    pub material_ambient: [f32; 3],
    /// Material diffuse reflectance.
    #[schemars(skip)]
    pub material_diffuse: [f32; 3],
    /// Material specular reflectance.
    #[schemars(skip)]
    pub material_specular: [f32; 3],
    /// Specular exponent.
    #[schemars(title = "Shininess", range(min = 2.0, max = 256.0), extend("step" = 2.0))]
    pub shininess: f32,
    /// Centre of the light orbit.
    #[schemars(skip)]
    pub orbit_center: [f32; 3],
    /// Horizontal swing of the light.
    #[schemars(title = "Orbit Radius", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub orbit_radius: f32,
    /// Vertical bob of the light.
    #[schemars(title = "Orbit Bob", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub orbit_bob: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light_ambient: [0.2, 0.2, 0.2],
            light_diffuse: [0.5, 0.5, 0.5],
            light_specular: [1.0, 1.0, 1.0],
            material_ambient: [1.0, 0.5, 0.31],
            material_diffuse: [1.0, 0.5, 0.31],
            material_specular: [0.5, 0.5, 0.05],
            shininess: 32.0,
            orbit_center: [1.0, 0.0, 2.0],
            orbit_radius: 2.0,
            orbit_bob: 1.0,
        }
    }
}
