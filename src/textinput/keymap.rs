//! Key bindings for the text input.

use crate::action::Action;
use crate::key::{self, Binding, KeyPress};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn ctrl(c: char) -> KeyPress {
    KeyPress::from((KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Key bindings for editing within the input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Paste from clipboard.
    pub paste: Binding,
}

/// The default editing bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: Binding::new(vec![KeyPress::from(KeyCode::Right), ctrl('f')]),
        character_backward: Binding::new(vec![KeyPress::from(KeyCode::Left), ctrl('b')]),
        delete_character_backward: Binding::new(vec![
            KeyPress::from(KeyCode::Backspace),
            ctrl('h'),
        ]),
        delete_character_forward: Binding::new(vec![KeyPress::from(KeyCode::Delete), ctrl('d')]),
        delete_after_cursor: Binding::new(vec![ctrl('k')]),
        delete_before_cursor: Binding::new(vec![ctrl('u')]),
        line_start: Binding::new(vec![KeyPress::from(KeyCode::Home), ctrl('a')]),
        line_end: Binding::new(vec![KeyPress::from(KeyCode::End), ctrl('e')]),
        paste: Binding::new(vec![ctrl('v')]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl KeyMap {
    /// Resolves `msg` into an editing action. Printable characters become
    /// [`Action::Insert`]. Line deletion and paste have no action and are
    /// handled by the input itself.
    pub fn resolve(&self, msg: &KeyMsg) -> Option<Action> {
        let action = if self.character_forward.matches(msg) {
            Action::CursorRight
        } else if self.character_backward.matches(msg) {
            Action::CursorLeft
        } else if self.delete_character_backward.matches(msg) {
            Action::DeleteBackward
        } else if self.delete_character_forward.matches(msg) {
            Action::DeleteForward
        } else if self.line_start.matches(msg) {
            Action::CursorStart
        } else if self.line_end.matches(msg) {
            Action::CursorEnd
        } else {
            return key::text_char(msg).map(|c| Action::Insert(c.to_string()));
        };
        Some(action)
    }
}
