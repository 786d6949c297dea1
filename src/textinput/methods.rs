//! Editing, configuration and message handling for the text input.

use super::model::{paste, Model};
use super::types::{EchoMode, PasteErrMsg, PasteMsg, ValidateFunc};
use crate::action::Action;
use crate::style::SharedStyle;
use crate::text::Sanitizer;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use tracing::debug;
use unicode_width::UnicodeWidthChar;

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

impl Model {
    /// Replaces the value, truncated to the char limit, and moves the cursor
    /// to the end.
    pub fn set_value(&mut self, s: &str) {
        self.buffer.set_value(s);
        self.after_edit();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.buffer.value()
    }

    /// Cursor position in code points.
    pub fn position(&self) -> usize {
        self.buffer.position()
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.buffer.set_position(pos);
        self.handle_overflow();
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.buffer.len());
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.set_value("");
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the prompt.
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    /// Limits the visible text to `width` columns; 0 means unbounded.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Visible width; 0 when unbounded.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the echo mode.
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Caps the value at `limit` code points; 0 means unbounded.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.buffer.set_char_limit(limit);
    }

    /// The char limit.
    pub fn char_limit(&self) -> usize {
        self.buffer.char_limit()
    }

    /// Installs a validator and runs it against the current value.
    pub fn set_validate(&mut self, validate: ValidateFunc) {
        self.validate = Some(validate);
        self.err = self.run_validate();
    }

    /// Replaces the sanitizer applied to inserted text.
    pub fn set_sanitizer(&mut self, sanitizer: Sanitizer) {
        self.sanitizer = sanitizer;
    }

    /// Attaches a style provider.
    pub fn set_styles(&mut self, styles: SharedStyle) {
        self.styles = Some(styles);
    }

    /// Inserts `s` at the cursor after sanitizing it. The whole run is
    /// dropped when it does not fit the char limit.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let run = self.sanitizer.sanitize(s);
        if !self.buffer.insert(&run) {
            return false;
        }
        self.after_edit();
        true
    }

    /// Applies one action. Ignored while unfocused.
    pub fn handle(&mut self, action: Action) {
        if !self.focus {
            return;
        }
        match action {
            Action::Insert(s) => {
                self.insert_str(&s);
            }
            Action::DeleteBackward => {
                if self.buffer.delete_backward() {
                    self.after_edit();
                }
            }
            Action::DeleteForward => {
                if self.buffer.delete_forward() {
                    self.after_edit();
                }
            }
            Action::CursorLeft => {
                self.buffer.left();
                self.handle_overflow();
            }
            Action::CursorRight => {
                self.buffer.right();
                self.handle_overflow();
            }
            Action::CursorStart => self.cursor_start(),
            Action::CursorEnd => self.cursor_end(),
            _ => {}
        }
    }

    /// Handles key presses and clipboard messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(PasteMsg(text)) = msg.downcast_ref::<PasteMsg>() {
            self.insert_str(text);
            return None;
        }
        if let Some(PasteErrMsg(e)) = msg.downcast_ref::<PasteErrMsg>() {
            debug!(error = %e, "paste failed");
            self.err = Some(e.clone());
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>()?;
        if self.key_map.paste.matches(key) {
            return Some(paste());
        }
        if self.key_map.delete_before_cursor.matches(key) {
            if self.buffer.delete_to_start() {
                self.after_edit();
            }
            return None;
        }
        if self.key_map.delete_after_cursor.matches(key) {
            if self.buffer.delete_to_end() {
                self.after_edit();
            }
            return None;
        }
        if let Some(action) = self.key_map.resolve(key) {
            self.handle(action);
        }
        None
    }

    fn run_validate(&self) -> Option<String> {
        let validate = self.validate.as_ref()?;
        let err = validate(&self.buffer.value()).err();
        if let Some(e) = &err {
            debug!(error = %e, "input failed validation");
        }
        err
    }

    fn after_edit(&mut self) {
        self.err = self.run_validate();
        self.handle_overflow();
    }

    /// Keeps the cursor inside the `[offset, offset_right)` window of at
    /// most `width` columns.
    pub(super) fn handle_overflow(&mut self) {
        let value = self.buffer.chars();
        let pos = self.buffer.position();
        let total: usize = value.iter().map(|&c| char_width(c)).sum();

        if self.width == 0 || total <= self.width {
            self.offset = 0;
            self.offset_right = value.len();
            return;
        }

        self.offset_right = self.offset_right.min(value.len());
        self.offset = self.offset.min(self.offset_right);

        if pos < self.offset {
            self.offset = pos;
            let mut w = 0;
            let mut i = self.offset;
            while i < value.len() && w + char_width(value[i]) <= self.width {
                w += char_width(value[i]);
                i += 1;
            }
            self.offset_right = i;
        } else if pos >= self.offset_right {
            self.offset_right = (pos + 1).min(value.len());
            let mut w = 0;
            let mut i = self.offset_right;
            while i > 0 && w + char_width(value[i - 1]) <= self.width {
                w += char_width(value[i - 1]);
                i -= 1;
            }
            self.offset = i;
        }
    }
}

impl Component for Model {
    fn focus(&mut self) {
        self.focus = true;
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
