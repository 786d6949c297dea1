//! Semantic input actions.
//!
//! Widgets never see raw key events. Something upstream (a key map from
//! [`crate::key`], or the host application's own decoder) turns key presses
//! into [`Action`]s, and widgets apply them through their `handle` method.
//! Actions a widget has no use for are ignored.

/// A resolved user intent delivered to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one row up.
    MoveUp,
    /// Move the cursor one row down.
    MoveDown,
    /// Move the cursor up by one window height.
    PageUp,
    /// Move the cursor down by one window height.
    PageDown,
    /// Jump to the first row.
    Home,
    /// Jump to the last row.
    End,
    /// Flip the selection state of the row under the cursor.
    ToggleCurrent,
    /// Select everything that fits, or deselect everything if all is selected.
    ToggleAll,
    /// Append a character to the filter query.
    FilterChar(char),
    /// Remove the last character of the filter query.
    FilterBackspace,
    /// Empty the filter query.
    FilterClear,
    /// Insert a run of text at the text cursor.
    Insert(String),
    /// Delete the character before the text cursor.
    DeleteBackward,
    /// Delete the character under the text cursor.
    DeleteForward,
    /// Move the text cursor one character left.
    CursorLeft,
    /// Move the text cursor one character right.
    CursorRight,
    /// Move the text cursor to the start of the line.
    CursorStart,
    /// Move the text cursor to the end of the line.
    CursorEnd,
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
}

impl Action {
    /// Returns true for actions that edit text content.
    pub fn edits_text(&self) -> bool {
        matches!(
            self,
            Action::Insert(_) | Action::DeleteBackward | Action::DeleteForward
        )
    }
}
