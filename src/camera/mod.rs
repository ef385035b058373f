//! Camera system for first-person scene viewing.
//!
//! Provides an Euler-angle fly camera with keyboard movement, mouse-look,
//! scroll zoom, a from-scratch look-at view matrix, and the GPU uniform
//! block the renderer consumes.

/// Core camera struct, look-at primitive and GPU uniform type.
pub mod core;

pub use self::core::{look_at, Camera, CameraMovement, CameraUniform};
