//! Keyboard shortcuts for the object collection.
//!
//! | Key                  | Action                  |
//! |----------------------|-------------------------|
//! | Delete / Backspace   | delete selected object  |
//! | Escape               | clear selection         |
//! | Ctrl+D               | duplicate selected      |
//!
//! Nothing fires while a text input has focus. Key capture belongs to the
//! host; this module only maps events onto [`SceneState`] operations.

use serde::{Deserialize, Serialize};
use shared::ObjectId;

use crate::state::SceneState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` name, ignoring case
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c.to_ascii_lowercase());
        }
        match name.to_ascii_lowercase().as_str() {
            "delete" | "del" => Key::Delete,
            "backspace" => Key::Backspace,
            "escape" | "esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Ctrl (or Cmd) held
    pub ctrl: bool,
    /// A text field currently has focus
    pub input_focused: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            input_focused: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn in_input(mut self) -> Self {
        self.input_focused = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    DeleteSelected,
    ClearSelection,
    DuplicateSelected,
}

/// What a handled shortcut did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShortcutOutcome {
    Deleted { id: ObjectId },
    SelectionCleared { id: ObjectId },
    Duplicated { source: ObjectId, copy: ObjectId },
}

pub fn shortcut_for(event: &KeyEvent) -> Option<ShortcutAction> {
    if event.input_focused {
        return None;
    }
    match event.key {
        Key::Delete | Key::Backspace => Some(ShortcutAction::DeleteSelected),
        Key::Escape => Some(ShortcutAction::ClearSelection),
        Key::Char('d') if event.ctrl => Some(ShortcutAction::DuplicateSelected),
        _ => None,
    }
}

/// Apply the shortcut for `event` to the selected object.
///
/// Returns `None` when the event maps to no shortcut or nothing is selected.
pub fn handle_key(scene: &mut SceneState, event: &KeyEvent) -> Option<ShortcutOutcome> {
    let action = shortcut_for(event)?;
    let id = scene.selected()?.id;

    let outcome = match action {
        ShortcutAction::DeleteSelected => {
            scene.delete(id).ok()?;
            ShortcutOutcome::Deleted { id }
        }
        ShortcutAction::ClearSelection => {
            scene.clear_selection();
            ShortcutOutcome::SelectionCleared { id }
        }
        ShortcutAction::DuplicateSelected => {
            let copy = scene.duplicate(id).ok()?;
            ShortcutOutcome::Duplicated { source: id, copy }
        }
    };
    tracing::debug!("Shortcut {:?} -> {:?}", action, outcome);
    Some(outcome)
}
