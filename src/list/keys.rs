//! Key bindings for list navigation and filtering.
//!
//! - **Cursor**: `↑/ctrl+p` up, `↓/ctrl+n` down
//! - **Paging**: `pgup`, `pgdn`, `home`, `end`
//! - **Filter**: printable characters extend the query, `backspace` shortens
//!   it, `esc/ctrl+u` clears it
//!
//! Letters always go to the filter, so unlike the select key map there are
//! no vim-style letter bindings here.

use crate::action::Action;
use crate::key::{self, Binding, KeyMap, KeyPress};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for [`super::Model`].
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move the cursor up one item.
    pub cursor_up: Binding,
    /// Move the cursor down one item.
    pub cursor_down: Binding,
    /// Move up one page.
    pub prev_page: Binding,
    /// Move down one page.
    pub next_page: Binding,
    /// Jump to the first item.
    pub go_to_start: Binding,
    /// Jump to the last item.
    pub go_to_end: Binding,
    /// Remove the last query character.
    pub filter_backspace: Binding,
    /// Clear the query.
    pub clear_filter: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![
                KeyPress::from(KeyCode::Up),
                KeyPress::from((KeyCode::Char('p'), KeyModifiers::CONTROL)),
            ])
            .with_help("↑", "up"),
            cursor_down: Binding::new(vec![
                KeyPress::from(KeyCode::Down),
                KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)),
            ])
            .with_help("↓", "down"),
            prev_page: Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "next page"),
            go_to_start: Binding::new(vec![KeyCode::Home]).with_help("home", "go to start"),
            go_to_end: Binding::new(vec![KeyCode::End]).with_help("end", "go to end"),
            filter_backspace: Binding::new(vec![KeyCode::Backspace])
                .with_help("backspace", "edit filter"),
            clear_filter: Binding::new(vec![
                KeyPress::from(KeyCode::Esc),
                KeyPress::from((KeyCode::Char('u'), KeyModifiers::CONTROL)),
            ])
            .with_help("esc", "clear filter"),
        }
    }
}

impl ListKeyMap {
    /// Resolves `msg` into an action. Unbound printable characters become
    /// [`Action::FilterChar`].
    pub fn resolve(&self, msg: &KeyMsg) -> Option<Action> {
        let action = if self.cursor_up.matches(msg) {
            Action::MoveUp
        } else if self.cursor_down.matches(msg) {
            Action::MoveDown
        } else if self.prev_page.matches(msg) {
            Action::PageUp
        } else if self.next_page.matches(msg) {
            Action::PageDown
        } else if self.go_to_start.matches(msg) {
            Action::Home
        } else if self.go_to_end.matches(msg) {
            Action::End
        } else if self.filter_backspace.matches(msg) {
            Action::FilterBackspace
        } else if self.clear_filter.matches(msg) {
            Action::FilterClear
        } else {
            return key::text_char(msg).map(Action::FilterChar);
        };
        Some(action)
    }
}

impl KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.clear_filter]
    }
}
