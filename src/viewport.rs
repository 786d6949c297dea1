//! Cursor and scroll window over an ordered sequence.
//!
//! [`ViewportCursor`] is the one place the list, select and multi-select
//! widgets keep their cursor/scroll math. It tracks two integers, the cursor
//! index into the active view and the offset of the first visible row, and
//! keeps them consistent for a window of fixed height:
//!
//! ```text
//! 0 <= offset <= cursor <= offset + height - 1     (len > 0, height > 0)
//! ```
//!
//! Movement clamps at both ends; there is no wraparound.
//!
//! # Example
//!
//! ```rust
//! use wizard_widgets::viewport::ViewportCursor;
//!
//! let mut vc = ViewportCursor::new(10, 3);
//! vc.page_down();
//! assert_eq!(vc.cursor(), 3);
//! assert_eq!(vc.offset(), 1);
//! assert_eq!(vc.visible_range(), 1..4);
//! vc.end();
//! assert_eq!((vc.cursor(), vc.offset()), (9, 7));
//! ```

use std::ops::Range;

/// Cursor index plus scroll offset for a window of `height` rows over `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportCursor {
    cursor: usize,
    offset: usize,
    len: usize,
    height: usize,
}

impl ViewportCursor {
    /// Creates a cursor at the top of a sequence of `len` items.
    pub fn new(len: usize, height: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            len,
            height,
        }
    }

    /// Index of the highlighted item. Always 0 for an empty sequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible item.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of items in the active view.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the active view is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the visible window in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows of the active view currently inside the window.
    pub fn visible_range(&self) -> Range<usize> {
        let end = self.offset.saturating_add(self.height).min(self.len);
        self.offset.min(end)..end
    }

    /// Whether items exist beyond the visible window.
    pub fn is_scrollable(&self) -> bool {
        self.len > self.height
    }

    /// Moves one row up.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.sync();
    }

    /// Moves one row down.
    pub fn move_down(&mut self) {
        self.set_cursor(self.cursor.saturating_add(1));
    }

    /// Moves up by one window height.
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page_step());
        self.sync();
    }

    /// Moves down by one window height.
    pub fn page_down(&mut self) {
        self.set_cursor(self.cursor.saturating_add(self.page_step()));
    }

    /// Jumps to the first row.
    pub fn home(&mut self) {
        self.set_cursor(0);
    }

    /// Jumps to the last row.
    pub fn end(&mut self) {
        self.set_cursor(self.len.saturating_sub(1));
    }

    /// Places the cursor at `index`, clamped into range.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.len.saturating_sub(1));
        self.sync();
    }

    /// Adapts to a replaced sequence of `len` items.
    ///
    /// The cursor keeps its index when still in range and is clamped to the
    /// last item otherwise. The window restarts at the top and is then slid
    /// down just far enough to contain the cursor.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.offset = 0;
        self.sync();
    }

    /// Re-anchors at the top of a freshly filtered view of `len` items.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.cursor = 0;
        self.offset = 0;
    }

    /// Changes the window height, keeping the cursor visible.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.sync();
    }

    fn page_step(&self) -> usize {
        self.height.max(1)
    }

    /// Re-establishes `offset <= cursor < offset + height`.
    fn sync(&mut self) {
        if self.len == 0 {
            self.cursor = 0;
            self.offset = 0;
            return;
        }
        if self.height == 0 {
            self.offset = self.cursor;
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset.saturating_add(self.height) {
            self.offset = self.cursor + 1 - self.height;
        }
    }
}
