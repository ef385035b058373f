//! Converts raw platform events into scene commands.
//!
//! The `InputProcessor` owns all transient input state (held keys,
//! mouse-look enablement and the last cursor sample) and the key-binding
//! map. It is the only thing that sits between raw window events and the
//! engine's [`execute`](crate::engine::SceneEngine::execute) method.
//!
//! Discrete events (look, zoom, toggles, quit) come back from
//! [`handle_event`](InputProcessor::handle_event) as commands. Held keys
//! are polled once per frame through
//! [`held_movements`](InputProcessor::held_movements) and
//! [`is_held`](InputProcessor::is_held).

use std::collections::HashSet;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::MouseLook;
use crate::camera::CameraMovement;
use crate::engine::SceneCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`SceneCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// // Once per frame:
/// for movement in input_processor.held_movements() {
///     camera.process_keyboard(movement, dt);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Mouse-look toggle and cursor tracking.
    mouse_look: MouseLook,
    /// Actions whose key is currently down.
    held: HashSet<KeyAction>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            mouse_look: MouseLook::new(),
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Whether cursor motion currently steers the camera.
    #[must_use]
    pub fn mouse_look_enabled(&self) -> bool {
        self.mouse_look.enabled()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are released.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held.clear();
    }

    /// Whether the key bound to `action` is currently down.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Camera movements for every held movement key, in a fixed order.
    pub fn held_movements(&self) -> impl Iterator<Item = CameraMovement> + '_ {
        KeyAction::ALL
            .into_iter()
            .filter(|action| self.held.contains(action))
            .filter_map(KeyAction::movement)
    }

    /// Release every held key (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let offset = self.mouse_look.sample(x, y)?;
                Some(SceneCommand::Look {
                    x_offset: offset.x,
                    y_offset: offset.y,
                })
            }
            InputEvent::MouseMotion { dx, dy } => {
                let offset = self.mouse_look.motion(dx, dy)?;
                Some(SceneCommand::Look {
                    x_offset: offset.x,
                    y_offset: offset.y,
                })
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Right && pressed {
                    let enabled = self.mouse_look.toggle();
                    return Some(SceneCommand::SetMouseLook { enabled });
                }
                None
            }
            InputEvent::Scroll { delta } => Some(SceneCommand::Zoom { delta }),
            InputEvent::Key { key, pressed } => self.handle_key(&key, pressed),
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<SceneCommand> {
        let action = self.key_bindings.lookup(key)?;
        if !pressed {
            let _ = self.held.remove(&action);
            return None;
        }
        if action == KeyAction::Quit {
            return Some(SceneCommand::Quit);
        }
        let _ = self.held.insert(action);
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: name.to_owned(),
            pressed,
        }
    }

    #[test]
    fn held_keys_are_polled_until_released() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(key("KeyW", true)), None);
        assert_eq!(input.handle_event(key("KeyD", true)), None);
        assert_eq!(
            input.held_movements().collect::<Vec<_>>(),
            vec![CameraMovement::Forward, CameraMovement::Right]
        );

        let _ = input.handle_event(key("KeyW", false));
        assert_eq!(
            input.held_movements().collect::<Vec<_>>(),
            vec![CameraMovement::Right]
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(key("KeyZ", true)), None);
        assert_eq!(input.held_movements().count(), 0);
    }

    #[test]
    fn escape_quits() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(key("Escape", true)),
            Some(SceneCommand::Quit)
        );
        assert!(!input.is_held(KeyAction::Quit));
    }

    #[test]
    fn mix_keys_are_held_not_movements() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(key("ArrowUp", true));
        assert!(input.is_held(KeyAction::IncreaseMix));
        assert_eq!(input.held_movements().count(), 0);
    }

    #[test]
    fn cursor_motion_needs_mouse_look() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );

        assert_eq!(
            input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            }),
            Some(SceneCommand::SetMouseLook { enabled: true })
        );
        assert!(input.mouse_look_enabled());

        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 }),
            Some(SceneCommand::Look {
                x_offset: 0.0,
                y_offset: 0.0
            })
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 60.0, y: 40.0 }),
            Some(SceneCommand::Look {
                x_offset: 10.0,
                y_offset: 10.0
            })
        );
    }

    #[test]
    fn device_motion_steers_only_while_mouse_look_is_on() {
        let mut input = InputProcessor::new();
        let motion = InputEvent::MouseMotion { dx: 8.0, dy: 3.0 };
        assert_eq!(input.handle_event(motion.clone()), None);

        let right = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        };
        let _ = input.handle_event(right.clone());
        // Locked cursor: no absolute positions arrive, deltas still steer.
        assert_eq!(
            input.handle_event(motion.clone()),
            Some(SceneCommand::Look {
                x_offset: 8.0,
                y_offset: -3.0
            })
        );

        let _ = input.handle_event(right);
        assert_eq!(input.handle_event(motion), None);
    }

    #[test]
    fn right_release_and_left_click_do_not_toggle() {
        let mut input = InputProcessor::new();
        let release = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        };
        let left = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        };
        assert_eq!(input.handle_event(release), None);
        assert_eq!(input.handle_event(left), None);
        assert!(!input.mouse_look_enabled());
    }

    #[test]
    fn scroll_becomes_zoom() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(SceneCommand::Zoom { delta: 2.0 })
        );
    }

    #[test]
    fn rebinding_releases_held_keys() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(key("KeyW", true));
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "ArrowUp");
        input.set_key_bindings(bindings);
        assert_eq!(input.held_movements().count(), 0);
        let _ = input.handle_event(key("ArrowUp", true));
        assert!(input.is_held(KeyAction::MoveForward));
    }
}
