//! Single-line text buffer with a code-point cursor.

use tracing::debug;

/// Content plus a cursor in `[0, len]`, measured in code points.
///
/// A `char_limit` of 0 means unbounded. Inserting a run that would push the
/// content past the limit is rejected as a whole.
///
/// ```rust
/// use wizard_widgets::textinput::TextBuffer;
///
/// let mut buf = TextBuffer::with_char_limit(3);
/// assert!(buf.insert(&['a', 'b']));
/// assert!(!buf.insert(&['c', 'd']));
/// assert_eq!(buf.value(), "ab");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: Vec<char>,
    pos: usize,
    char_limit: usize,
}

impl TextBuffer {
    /// Creates an empty, unbounded buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer holding at most `limit` code points.
    pub fn with_char_limit(limit: usize) -> Self {
        Self {
            char_limit: limit,
            ..Self::default()
        }
    }

    /// The content as a string.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// The content as code points.
    pub fn chars(&self) -> &[char] {
        &self.value
    }

    /// Length in code points.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Maximum length; 0 when unbounded.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Changes the limit. Existing content is left alone.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Replaces the content, truncated to the limit, and moves the cursor
    /// to the end.
    pub fn set_value(&mut self, s: &str) {
        let mut chars: Vec<char> = s.chars().collect();
        if self.char_limit > 0 && chars.len() > self.char_limit {
            chars.truncate(self.char_limit);
        }
        self.value = chars;
        self.pos = self.value.len();
    }

    /// Moves the cursor to `pos`, clamped to the content.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Inserts `run` at the cursor and moves past it. Returns false and
    /// leaves the buffer untouched when the run does not fit.
    pub fn insert(&mut self, run: &[char]) -> bool {
        if run.is_empty() {
            return false;
        }
        if self.char_limit > 0 && self.value.len() + run.len() > self.char_limit {
            debug!(
                len = self.value.len(),
                run = run.len(),
                limit = self.char_limit,
                "insert rejected: char limit"
            );
            return false;
        }
        self.value.splice(self.pos..self.pos, run.iter().copied());
        self.pos += run.len();
        true
    }

    /// Deletes the code point before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        self.value.remove(self.pos);
        true
    }

    /// Deletes the code point under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.pos);
        true
    }

    /// Deletes everything before the cursor.
    pub fn delete_to_start(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.value.drain(..self.pos);
        self.pos = 0;
        true
    }

    /// Deletes everything from the cursor on.
    pub fn delete_to_end(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.truncate(self.pos);
        true
    }

    /// Moves the cursor one code point left.
    pub fn left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Moves the cursor one code point right.
    pub fn right(&mut self) {
        self.set_position(self.pos + 1);
    }

    /// Moves the cursor to the start.
    pub fn start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end.
    pub fn end(&mut self) {
        self.pos = self.value.len();
    }
}
