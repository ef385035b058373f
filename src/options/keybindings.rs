use std::collections::{hash_map::Entry, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`). Call
    /// [`rebuild_reverse_map`](Self::rebuild_reverse_map) after editing it
    /// directly.
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveUp, "KeyE".into()),
            (KeyAction::MoveDown, "KeyQ".into()),
            (KeyAction::IncreaseMix, "ArrowUp".into()),
            (KeyAction::DecreaseMix, "ArrowDown".into()),
            (KeyAction::Quit, "Escape".into()),
        ]))
    }
}

// Deserializing goes through the action table so the reverse map is never
// stale, whichever entry point parsed the options.
impl<'de> Deserialize<'de> for KeybindingOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(default)]
        struct Table {
            bindings: HashMap<KeyAction, String>,
        }

        impl Default for Table {
            fn default() -> Self {
                Self {
                    bindings: KeybindingOptions::default().bindings,
                }
            }
        }

        let table = Table::deserialize(deserializer)?;
        Ok(Self::from_bindings(table.bindings))
    }
}

impl KeybindingOptions {
    /// Build options from an action → key table.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<KeyAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// When several actions share a key, the one listed first in
    /// [`KeyAction::ALL`] owns it.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for action in KeyAction::ALL {
            let Some(key) = self.bindings.get(&action) else {
                continue;
            };
            match self.key_to_action.entry(key.clone()) {
                Entry::Vacant(slot) => {
                    let _ = slot.insert(action);
                }
                Entry::Occupied(slot) => {
                    let owner = *slot.get();
                    log::warn!(
                        "key {key} is bound to both {owner:?} and {action:?}; keeping {owner:?}"
                    );
                }
            }
        }
    }

    /// Look up the action bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind `action` to `key`. Any action previously on `key` is unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|_, bound| *bound != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }
}
