use glam::Vec3;

use crate::options::LightingOptions;

/// Point light that circles the lit object over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightOrbit {
    /// Orbit centre in world space.
    pub center: Vec3,
    /// Horizontal swing radius along X.
    pub radius: f32,
    /// Vertical bob amplitude.
    pub bob: f32,
}

impl LightOrbit {
    /// Build the orbit from lighting options.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            center: Vec3::from_array(options.orbit_center),
            radius: options.orbit_radius,
            bob: options.orbit_bob,
        }
    }

    /// Light position `t` seconds after startup.
    ///
    /// X swings at one radian per second, Y bobs at half that rate, Z stays
    /// on the centre plane.
    #[must_use]
    pub fn position_at(&self, t: f32) -> Vec3 {
        Vec3::new(
            self.center.x + t.cos() * self.radius,
            self.center.y + (t / 2.0).sin() * self.bob,
            self.center.z,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Phong light block, padded to std140 vec4 slots.
pub struct LightUniform {
    /// World-space light position.
    pub position: [f32; 3],
    pub(crate) _pad0: f32,
    /// Ambient colour.
    pub ambient: [f32; 3],
    pub(crate) _pad1: f32,
    /// Diffuse colour.
    pub diffuse: [f32; 3],
    pub(crate) _pad2: f32,
    /// Specular colour.
    pub specular: [f32; 3],
    pub(crate) _pad3: f32,
}

impl LightUniform {
    /// Light block at `position` with colours from the options.
    #[must_use]
    pub fn new(position: Vec3, options: &LightingOptions) -> Self {
        Self {
            position: position.to_array(),
            _pad0: 0.0,
            ambient: options.light_ambient,
            _pad1: 0.0,
            diffuse: options.light_diffuse,
            _pad2: 0.0,
            specular: options.light_specular,
            _pad3: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Phong material block. `shininess` shares the ambient vec4 slot.
pub struct MaterialUniform {
    /// Ambient reflectance.
    pub ambient: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
    /// Diffuse reflectance.
    pub diffuse: [f32; 3],
    pub(crate) _pad0: f32,
    /// Specular reflectance.
    pub specular: [f32; 3],
    pub(crate) _pad1: f32,
}

impl MaterialUniform {
    /// Material block from the options.
    #[must_use]
    pub fn new(options: &LightingOptions) -> Self {
        Self {
            ambient: options.material_ambient,
            shininess: options.shininess,
            diffuse: options.material_diffuse,
            _pad0: 0.0,
            specular: options.material_specular,
            _pad1: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn orbit_starts_at_far_swing() {
        let orbit = LightOrbit::from_options(&LightingOptions::default());
        let p = orbit.position_at(0.0);
        assert!(p.abs_diff_eq(Vec3::new(3.0, 0.0, 2.0), 1e-6));
    }

    #[test]
    fn orbit_reaches_top_of_bob_at_pi() {
        let orbit = LightOrbit::from_options(&LightingOptions::default());
        let p = orbit.position_at(PI);
        assert!(p.abs_diff_eq(Vec3::new(-1.0, 1.0, 2.0), 1e-5));
    }

    #[test]
    fn uniform_sizes_are_vec4_aligned() {
        assert_eq!(size_of::<LightUniform>(), 64);
        assert_eq!(size_of::<MaterialUniform>(), 48);
        let light = LightUniform::new(Vec3::ONE, &LightingOptions::default());
        assert_eq!(bytemuck::bytes_of(&light).len(), 64);
    }
}
