use glam::{Mat4, Vec3};

use crate::camera::CameraUniform;
use crate::scene::{LightUniform, MaterialUniform};

/// Everything the renderer needs to draw one frame.
///
/// Opaque geometry (`object_model`, `lamp_model`) is drawn first, then the
/// billboards in `transparent_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// Camera uniform block (view, projection, eye position, fovy).
    pub camera: CameraUniform,
    /// World-to-eye matrix.
    pub view: Mat4,
    /// Eye-to-clip matrix built from the camera zoom.
    pub projection: Mat4,
    /// Eye position for specular lighting.
    pub view_position: Vec3,
    /// Billboard positions, farthest first.
    pub transparent_order: Vec<Vec3>,
    /// Light uniform block at this frame's light position.
    pub light: LightUniform,
    /// Material uniform block for the lit object.
    pub material: MaterialUniform,
    /// Model matrix of the lit cube.
    pub object_model: Mat4,
    /// Model matrix of the lamp cube.
    pub lamp_model: Mat4,
    /// Framebuffer clear colour.
    pub clear_color: [f32; 3],
    /// Blend factor between the object's two textures.
    pub mix_value: f32,
}
