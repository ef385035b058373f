//! Shared utilities for the render loop.

/// Per-frame delta time, smoothed FPS and frame limiting.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
