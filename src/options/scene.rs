use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Static scene layout.
pub struct SceneOptions {
    /// World positions of the alpha-blended vegetation billboards.
    #[schemars(skip)]
    pub billboards: Vec<[f32; 3]>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            billboards: vec![
                [-1.5, 0.0, -0.48],
                [1.5, 0.0, 0.51],
                [0.0, 0.0, 0.7],
                [-0.3, 0.0, -2.3],
                [0.5, 0.0, -0.6],
            ],
        }
    }
}
