//! The engine's interactive vocabulary.
//!
//! Every discrete user-facing operation (a mouse-look delta, a scroll
//! notch, the mouse-look toggle, a quit request) is represented as a
//! `SceneCommand`. Held keys are not commands; they are polled per frame.

/// A discrete operation applied to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Rotate the camera by a cursor delta. Positive `y_offset` looks up.
    Look {
        /// Horizontal cursor delta in pixels.
        x_offset: f32,
        /// Vertical cursor delta in pixels, already inverted from screen
        /// space.
        y_offset: f32,
    },
    /// Adjust the field of view (positive narrows).
    Zoom {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Mouse-look was switched on or off. The host should grab or release
    /// the cursor accordingly.
    SetMouseLook {
        /// New mouse-look state.
        enabled: bool,
    },
    /// Close the window and end the render loop.
    Quit,
}
