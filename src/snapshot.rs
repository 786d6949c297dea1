//! Read-only render snapshots shared by the list-like widgets.
//!
//! A widget's `snapshot()` captures exactly what is on screen: the visible
//! window of its active view, which row carries the cursor, check state for
//! multi-select rows, and the scroll position. `view()` is this snapshot
//! painted through a style provider, so tests can assert on either.

use crate::style::{Role, StyleProvider};
use crate::text::{self, ELLIPSIS};

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Identity of the item: its index in the unfiltered sequence.
    pub index: usize,
    /// Display text.
    pub title: String,
    /// Description, possibly empty.
    pub description: String,
    /// Whether the cursor sits on this row.
    pub is_cursor: bool,
    /// Check state for multi-select rows; `None` for single-choice widgets.
    pub checked: Option<bool>,
    /// Whether the item is disabled.
    pub disabled: bool,
}

impl RowView {
    fn label(&self) -> String {
        if self.description.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.description)
        }
    }
}

/// Where the visible window sits in the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIndicator {
    /// Items in the active view.
    pub total: usize,
    /// First visible position.
    pub start: usize,
    /// One past the last visible position.
    pub end: usize,
}

impl ScrollIndicator {
    /// `"3-5 of 12"`, one-based and inclusive.
    pub fn summary(&self) -> String {
        if self.end <= self.start {
            return format!("0 of {}", self.total);
        }
        format!("{}-{} of {}", self.start + 1, self.end, self.total)
    }
}

/// Everything a list-like widget renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSnapshot {
    /// Optional title line.
    pub title: Option<String>,
    /// Active filter query, when one narrows the view.
    pub query: Option<String>,
    /// Items in the active view, visible or not.
    pub total: usize,
    /// Visible rows, top to bottom.
    pub rows: Vec<RowView>,
    /// Present when the active view is taller than the window.
    pub scroll: Option<ScrollIndicator>,
    /// Status text below the rows, e.g. a selection count.
    pub status: Option<String>,
    /// Whether the widget has focus.
    pub focused: bool,
}

/// Paints `snap` into lines no wider than `width` columns (0 = unbounded).
pub(crate) fn render(snap: &ListSnapshot, style: &dyn StyleProvider, width: usize) -> String {
    let measure = |s: &str| style.display_width(s);
    let mut lines = Vec::new();

    if let Some(title) = &snap.title {
        lines.push(style.paint(Role::Title, &clip(title, width, &measure)));
    }
    if let Some(query) = &snap.query {
        let header = format!("Filter: {}", query);
        lines.push(style.paint(Role::Muted, &clip(&header, width, &measure)));
    }

    if snap.total == 0 {
        lines.push(style.paint(Role::Muted, "No items."));
    }

    let marker = style.cursor_marker();
    let marker_width = measure(&marker);
    let blank_marker = " ".repeat(marker_width);

    for row in &snap.rows {
        let mut prefix = match (row.is_cursor, snap.focused) {
            (true, true) => marker.clone(),
            (true, false) => style.paint(Role::Muted, &marker),
            (false, _) => blank_marker.clone(),
        };
        prefix.push(' ');
        if let Some(checked) = row.checked {
            prefix.push_str(&style.checkbox(checked));
            prefix.push(' ');
        }

        let room = width.saturating_sub(measure(&prefix));
        let label = row.label();
        let label = if width > 0 { clip(&label, room, &measure) } else { label };
        let role = if row.disabled {
            Role::Muted
        } else if row.is_cursor {
            Role::RowSelected
        } else {
            Role::RowUnselected
        };
        lines.push(format!("{}{}", prefix, style.paint(role, &label)));
    }

    if let Some(scroll) = &snap.scroll {
        lines.push(style.paint(Role::Muted, &scroll.summary()));
    }
    if let Some(status) = &snap.status {
        lines.push(style.paint(Role::Muted, &clip(status, width, &measure)));
    }

    lines.join("\n")
}

fn clip<F: Fn(&str) -> usize>(s: &str, width: usize, measure: &F) -> String {
    if width == 0 {
        s.to_string()
    } else {
        text::truncate(s, width, ELLIPSIS, measure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyle;

    struct Tagged;

    impl StyleProvider for Tagged {
        fn paint(&self, role: Role, text: &str) -> String {
            format!("<{:?}>{}</{:?}>", role, text, role)
        }
    }

    fn row(index: usize, title: &str, is_cursor: bool, checked: Option<bool>) -> RowView {
        RowView {
            index,
            title: title.to_string(),
            description: String::new(),
            is_cursor,
            checked,
            disabled: false,
        }
    }

    #[test]
    fn test_render_marks_cursor_row() {
        let snap = ListSnapshot {
            total: 2,
            rows: vec![row(0, "one", false, None), row(1, "two", true, None)],
            focused: true,
            ..Default::default()
        };
        assert_eq!(render(&snap, &PlainStyle, 0), "  one\n> two");
    }

    #[test]
    fn test_render_keeps_marker_when_unfocused() {
        let snap = ListSnapshot {
            total: 2,
            rows: vec![row(0, "one", true, None), row(1, "two", false, None)],
            focused: false,
            ..Default::default()
        };
        assert_eq!(render(&snap, &PlainStyle, 0), "> one\n  two");

        let dimmed = render(&snap, &Tagged, 0);
        assert!(dimmed.starts_with("<Muted>></Muted> "), "{dimmed}");
    }

    #[test]
    fn test_render_empty_window_is_not_empty_list() {
        let snap = ListSnapshot {
            total: 2,
            scroll: Some(ScrollIndicator {
                total: 2,
                start: 0,
                end: 0,
            }),
            focused: true,
            ..Default::default()
        };
        assert_eq!(render(&snap, &PlainStyle, 0), "0 of 2");
    }

    #[test]
    fn test_render_checkboxes_and_indicator() {
        let snap = ListSnapshot {
            total: 5,
            rows: vec![row(0, "a", true, Some(true)), row(1, "b", false, Some(false))],
            scroll: Some(ScrollIndicator {
                total: 5,
                start: 0,
                end: 2,
            }),
            focused: true,
            ..Default::default()
        };
        assert_eq!(
            render(&snap, &PlainStyle, 0),
            "> [x] a\n  [ ] b\n1-2 of 5"
        );
    }

    #[test]
    fn test_render_empty_and_query() {
        let snap = ListSnapshot {
            title: Some("Fruit".to_string()),
            query: Some("zz".to_string()),
            focused: true,
            ..Default::default()
        };
        assert_eq!(render(&snap, &PlainStyle, 0), "Fruit\nFilter: zz\nNo items.");
    }

    #[test]
    fn test_render_truncates_to_width() {
        let snap = ListSnapshot {
            total: 1,
            rows: vec![row(0, "Strawberry milkshake", true, None)],
            focused: true,
            ..Default::default()
        };
        let out = render(&snap, &PlainStyle, 10);
        assert_eq!(out, "> Strawbe…");
        assert_eq!(text::display_width(&out), 10);
    }
}
