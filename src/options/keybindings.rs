use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"ArrowUp"`, `"KeyI"`, `"Home"`, etc. Several keys may share an action.
pub struct KeybindingOptions {
    /// Maps key string → action.
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = [
            ("ArrowUp", KeyAction::PanUp),
            ("ArrowDown", KeyAction::PanDown),
            ("ArrowLeft", KeyAction::PanLeft),
            ("ArrowRight", KeyAction::PanRight),
            ("KeyI", KeyAction::ZoomIn),
            ("Equal", KeyAction::ZoomIn),
            ("NumpadAdd", KeyAction::ZoomIn),
            ("KeyO", KeyAction::ZoomOut),
            ("Minus", KeyAction::ZoomOut),
            ("NumpadSubtract", KeyAction::ZoomOut),
            ("Home", KeyAction::ResetView),
            ("KeyG", KeyAction::ToggleGrid),
            ("KeyL", KeyAction::ToggleLidar),
            ("KeyK", KeyAction::ToggleLines),
        ]
        .into_iter()
        .map(|(key, action)| (key.to_owned(), action))
        .collect();

        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, returning the action it replaced.
    pub fn bind(&mut self, key: &str, action: KeyAction) -> Option<KeyAction> {
        self.bindings.insert(key.to_owned(), action)
    }
}
