use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera start pose, control speeds and clip planes.
pub struct CameraOptions {
    /// Start position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// World up reference. Normalized where used.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Start yaw in degrees.
    #[schemars(title = "Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Start pitch in degrees.
    #[schemars(title = "Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Keyboard movement speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
