//! Scene contents that change per frame: the transparent billboard set and
//! the orbiting light.

/// Orbiting point light and Phong uniform blocks.
pub mod lighting;
/// Back-to-front ordering of alpha-blended billboards.
pub mod transparency;

use glam::Vec3;

pub use lighting::{LightOrbit, LightUniform, MaterialUniform};
pub use transparency::{back_to_front_indices, order_back_to_front, TransparentSet};

use crate::options::Options;

/// World placement of the lit cube.
pub const OBJECT_POSITION: Vec3 = Vec3::new(0.0, -1.0, 0.0);
/// Uniform scale of the lamp cube drawn at the light position.
pub const LAMP_SCALE: f32 = 0.2;

/// Static scene layout plus the light animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Alpha-blended billboards.
    pub billboards: TransparentSet,
    /// Animated point light.
    pub light: LightOrbit,
}

impl Scene {
    /// Lay out the scene from options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let positions = options
            .scene
            .billboards
            .iter()
            .copied()
            .map(Vec3::from_array)
            .collect();
        Self {
            billboards: TransparentSet::new(positions),
            light: LightOrbit::from_options(&options.lighting),
        }
    }
}
