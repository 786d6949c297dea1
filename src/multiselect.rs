//! Multi-choice select with cardinality bounds.
//!
//! Rows carry check boxes. [`Action::ToggleCurrent`] flips the row under
//! the cursor and [`Action::ToggleAll`] selects or clears everything, both
//! through a [`SelectionSet`] that keeps disabled items out and refuses to
//! grow past `max`. The lower bound `min` only matters for
//! [`Model::is_valid`].
//!
//! ```rust
//! use wizard_widgets::item::items_from;
//! use wizard_widgets::multiselect::Model;
//! use wizard_widgets::{Action, Component};
//!
//! let mut ms = Model::new(items_from(&["A", "B", "C"]), 5).with_limits(0, 2);
//! ms.focus();
//! ms.handle(Action::ToggleCurrent);
//! ms.handle(Action::MoveDown);
//! ms.handle(Action::ToggleCurrent);
//! ms.handle(Action::MoveDown);
//! ms.handle(Action::ToggleCurrent);
//! assert_eq!(ms.selected_labels(), vec!["A", "B"]);
//! ```

use crate::action::Action;
use crate::help::Help;
use crate::item::Item;
use crate::key::SelectKeyMap;
use crate::selection::SelectionSet;
use crate::snapshot::{self, ListSnapshot, RowView, ScrollIndicator};
use crate::style::{self, SharedStyle};
use crate::viewport::ViewportCursor;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// Multi-select state.
pub struct Model<T> {
    items: Vec<Item<T>>,
    viewport: ViewportCursor,
    selection: SelectionSet,
    focus: bool,
    title: Option<String>,
    width: usize,
    show_help: bool,
    styles: Option<SharedStyle>,
    /// Key bindings used by [`Model::update`].
    pub keymap: SelectKeyMap,
    /// Help line settings.
    pub help: Help,
}

impl<T> Model<T> {
    /// Creates an unfocused, unbounded multi-select showing `height` rows.
    pub fn new(items: Vec<Item<T>>, height: usize) -> Self {
        let viewport = ViewportCursor::new(items.len(), height);
        Self {
            items,
            viewport,
            selection: SelectionSet::new(),
            focus: false,
            title: None,
            width: 0,
            show_help: false,
            styles: None,
            keymap: SelectKeyMap::default(),
            help: Help::new(),
        }
    }

    /// Sets the selection bounds; `max == 0` means unbounded.
    pub fn with_limits(mut self, min: usize, max: usize) -> Self {
        self.selection.set_limits(min, max);
        self
    }

    /// Sets the title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attaches a style provider.
    pub fn with_styles(mut self, styles: SharedStyle) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Limits rendered lines to `width` columns; 0 means unbounded.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Shows the key help line under the rows.
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// The sequence.
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.viewport.cursor()
    }

    /// First visible position.
    pub fn offset(&self) -> usize {
        self.viewport.offset()
    }

    /// The underlying selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected items in sequence order.
    pub fn selected_items(&self) -> Vec<&Item<T>> {
        self.selection
            .indices()
            .filter_map(|i| self.items.get(i))
            .collect()
    }

    /// Values of the selected items in sequence order.
    pub fn selected_values(&self) -> Vec<&T> {
        self.selected_items().into_iter().map(Item::value).collect()
    }

    /// Titles of the selected items in sequence order.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selected_items().into_iter().map(Item::title).collect()
    }

    /// Whether the selection count lies within the bounds.
    pub fn is_valid(&self) -> bool {
        self.selection.is_valid()
    }

    /// Replaces the sequence. The selection is cleared because identities
    /// are positional; the cursor is clamped.
    pub fn set_items(&mut self, items: Vec<Item<T>>) {
        self.items = items;
        self.selection.clear();
        self.viewport.resize(self.items.len());
    }

    /// Replaces the selection with `indices`, skipping disabled items and
    /// stopping at `max`.
    pub fn set_selected(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.selection.set_selected(&self.items, indices);
    }

    /// Changes the number of visible rows.
    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
    }

    /// Applies one action. Ignored while unfocused.
    pub fn handle(&mut self, action: Action) {
        if !self.focus {
            return;
        }
        match action {
            Action::MoveUp => self.viewport.move_up(),
            Action::MoveDown => self.viewport.move_down(),
            Action::PageUp => self.viewport.page_up(),
            Action::PageDown => self.viewport.page_down(),
            Action::Home => self.viewport.home(),
            Action::End => self.viewport.end(),
            Action::ToggleCurrent => {
                if !self.viewport.is_empty() {
                    self.selection.toggle(&self.items, self.viewport.cursor());
                }
            }
            Action::ToggleAll => self.selection.toggle_all(&self.items),
            _ => {}
        }
    }

    /// Resolves key presses through [`Model::keymap`] and applies them.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if let Some(action) = self.keymap.resolve(key) {
                self.handle(action);
            }
        }
        None
    }

    fn status(&self) -> String {
        let count = self.selection.count();
        match self.selection.max() {
            0 => format!("{} selected", count),
            max => format!("{}/{} selected", count, max),
        }
    }

    /// What the multi-select currently shows.
    pub fn snapshot(&self) -> ListSnapshot {
        let range = self.viewport.visible_range();
        let cursor = self.viewport.cursor();
        let rows = range
            .clone()
            .filter_map(|index| {
                let item = self.items.get(index)?;
                Some(RowView {
                    index,
                    title: item.title().to_string(),
                    description: item.description().to_string(),
                    is_cursor: index == cursor,
                    checked: Some(self.selection.contains(index)),
                    disabled: item.is_disabled(),
                })
            })
            .collect();

        ListSnapshot {
            title: self.title.clone(),
            query: None,
            total: self.viewport.len(),
            rows,
            scroll: self.viewport.is_scrollable().then(|| ScrollIndicator {
                total: self.viewport.len(),
                start: range.start,
                end: range.end,
            }),
            status: (!self.items.is_empty()).then(|| self.status()),
            focused: self.focus,
        }
    }

    /// Renders the multi-select.
    pub fn view(&self) -> String {
        let style = style::resolve(&self.styles);
        let mut out = snapshot::render(&self.snapshot(), style, self.width);
        if self.show_help {
            let help = self.help.clone().with_width(self.width);
            out.push('\n');
            out.push_str(&help.view(&self.keymap, style));
        }
        out
    }
}

impl<T> Component for Model<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::items_from;
    use crate::style::{Role, StyleProvider};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::Arc;

    fn abc(max: usize) -> Model<String> {
        let mut m = Model::new(items_from(&["A", "B", "C"]), 5).with_limits(0, max);
        m.focus();
        m
    }

    fn toggle_at(m: &mut Model<String>, index: usize) {
        m.handle(Action::Home);
        for _ in 0..index {
            m.handle(Action::MoveDown);
        }
        m.handle(Action::ToggleCurrent);
    }

    #[test]
    fn test_max_rejects_extra_toggle() {
        let mut m = abc(2);
        toggle_at(&mut m, 0);
        toggle_at(&mut m, 1);
        assert_eq!(m.selected_labels(), vec!["A", "B"]);
        toggle_at(&mut m, 2);
        assert_eq!(m.selected_labels(), vec!["A", "B"]);
        assert!(m.is_valid());
    }

    #[test]
    fn test_projections_follow_sequence_order() {
        let items = vec![Item::new(10, "ten"), Item::new(20, "twenty"), Item::new(30, "thirty")];
        let mut m = Model::new(items, 5);
        m.focus();
        m.handle(Action::End);
        m.handle(Action::ToggleCurrent);
        m.handle(Action::Home);
        m.handle(Action::ToggleCurrent);
        assert_eq!(m.selected_values(), vec![&10, &30]);
        assert_eq!(m.selected_labels(), vec!["ten", "thirty"]);
    }

    #[test]
    fn test_disabled_item_cannot_be_toggled() {
        let items = vec![Item::new(1, "one").disabled(true), Item::new(2, "two")];
        let mut m = Model::new(items, 5);
        m.focus();
        m.handle(Action::ToggleCurrent);
        assert!(m.selected_items().is_empty());
        m.handle(Action::ToggleAll);
        assert_eq!(m.selected_labels(), vec!["two"]);
    }

    #[test]
    fn test_toggle_all_round_trip() {
        let mut m = abc(0);
        m.handle(Action::ToggleAll);
        assert_eq!(m.selected_labels(), vec!["A", "B", "C"]);
        m.handle(Action::ToggleAll);
        assert!(m.selected_labels().is_empty());
    }

    #[test]
    fn test_min_bound_validity() {
        let mut m = Model::new(items_from(&["a", "b"]), 5).with_limits(1, 0);
        assert!(!m.is_valid());
        m.set_selected([1]);
        assert!(m.is_valid());
    }

    #[test]
    fn test_set_items_clears_selection() {
        let mut m = abc(0);
        m.handle(Action::ToggleAll);
        m.handle(Action::End);
        m.set_items(items_from(&["x"]));
        assert!(m.selected_items().is_empty());
        assert_eq!(m.cursor(), 0);
    }

    #[test]
    fn test_toggle_on_empty_is_noop() {
        let mut m: Model<String> = Model::new(Vec::new(), 3);
        m.focus();
        m.handle(Action::ToggleCurrent);
        m.handle(Action::ToggleAll);
        assert_eq!(m.selection().count(), 0);
        assert_eq!(m.view(), "No items.");
    }

    #[test]
    fn test_unfocused_ignores_toggles() {
        let mut m = abc(0);
        m.blur();
        m.handle(Action::ToggleAll);
        assert_eq!(m.selection().count(), 0);
    }

    #[test]
    fn test_update_resolves_space_and_a() {
        let mut m = abc(0);
        let key = |code| KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        };
        m.update(Box::new(key(KeyCode::Char(' '))));
        assert_eq!(m.selected_labels(), vec!["A"]);
        m.update(Box::new(key(KeyCode::Char('a'))));
        assert_eq!(m.selected_labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_view_plain_checkboxes() {
        let mut m = abc(2);
        toggle_at(&mut m, 1);
        assert_eq!(m.view(), "  [ ] A\n> [x] B\n  [ ] C\n1/2 selected");
    }

    struct Stars;

    impl StyleProvider for Stars {
        fn paint(&self, _role: Role, text: &str) -> String {
            text.to_string()
        }

        fn checkbox(&self, checked: bool) -> String {
            if checked { "*" } else { "." }.to_string()
        }

        fn cursor_marker(&self) -> String {
            "→".to_string()
        }
    }

    #[test]
    fn test_view_uses_provider_glyphs() {
        let mut m = Model::new(items_from(&["A", "B"]), 5).with_styles(Arc::new(Stars));
        m.focus();
        m.handle(Action::ToggleCurrent);
        assert_eq!(m.view(), "→ * A\n  . B\n1 selected");
    }
}
