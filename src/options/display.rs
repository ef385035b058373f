use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Window and frame presentation settings.
pub struct DisplayOptions {
    /// Window title.
    #[schemars(skip)]
    pub title: String,
    /// Initial window width in logical pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Initial window height in logical pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Framebuffer clear colour.
    #[schemars(skip)]
    pub clear_color: [f32; 3],
    /// Initial blend factor between the two object textures.
    #[schemars(title = "Texture Mix", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub mix_value: f32,
    /// Change in `mix_value` per frame while a mix key is held.
    #[schemars(skip)]
    pub mix_step: f32,
    /// Frame rate cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: "Vantage".into(),
            width: 800,
            height: 600,
            clear_color: [0.45, 0.55, 0.60],
            mix_value: 0.0,
            mix_step: 0.01,
            target_fps: 0,
        }
    }
}
