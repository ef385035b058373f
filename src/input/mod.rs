//! Input handling: event types, mouse-look state, and the input processor
//! that converts raw window events into scene commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Mouse-look toggle and cursor delta tracking.
pub mod mouse;
/// Converts raw events into scene commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use mouse::MouseLook;
pub use processor::InputProcessor;
