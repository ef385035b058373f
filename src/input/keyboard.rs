use serde::{Deserialize, Serialize};

use crate::camera::CameraMovement;

/// Scene actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// quit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction while held.
    MoveForward,
    /// Move against the view direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Rise along world up while held.
    MoveUp,
    /// Sink along world up while held.
    MoveDown,
    /// Raise the texture mix factor while held.
    IncreaseMix,
    /// Lower the texture mix factor while held.
    DecreaseMix,
    /// Close the window.
    Quit,
}

impl KeyAction {
    /// Every action, in per-frame polling order.
    pub const ALL: [Self; 9] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::IncreaseMix,
        Self::DecreaseMix,
        Self::Quit,
    ];

    /// The camera translation this action drives, if any.
    #[must_use]
    pub fn movement(self) -> Option<CameraMovement> {
        match self {
            Self::MoveForward => Some(CameraMovement::Forward),
            Self::MoveBackward => Some(CameraMovement::Backward),
            Self::MoveLeft => Some(CameraMovement::Left),
            Self::MoveRight => Some(CameraMovement::Right),
            Self::MoveUp => Some(CameraMovement::Up),
            Self::MoveDown => Some(CameraMovement::Down),
            Self::IncreaseMix | Self::DecreaseMix | Self::Quit => None,
        }
    }
}
