//! List state and the actions that drive it.

use super::keys::ListKeyMap;
use crate::action::Action;
use crate::filter::{FilterEngine, MatchMode};
use crate::help::Help;
use crate::item::Item;
use crate::style::SharedStyle;
use crate::viewport::ViewportCursor;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// A filterable single-choice list.
///
/// The cursor and viewport index into the filtered view; item identity is
/// always the index in the unfiltered sequence.
pub struct Model<T> {
    pub(super) items: Vec<Item<T>>,
    pub(super) filter: FilterEngine,
    pub(super) viewport: ViewportCursor,
    pub(super) focus: bool,
    pub(super) title: Option<String>,
    pub(super) width: usize,
    pub(super) show_help: bool,
    pub(super) styles: Option<SharedStyle>,
    /// Key bindings used by [`Model::update`].
    pub keymap: ListKeyMap,
    /// Help line settings.
    pub help: Help,
}

impl<T> Model<T> {
    /// Creates an unfocused list showing `height` rows at a time.
    pub fn new(items: Vec<Item<T>>, height: usize) -> Self {
        let filter = FilterEngine::new(&items);
        let viewport = ViewportCursor::new(filter.len(), height);
        Self {
            items,
            filter,
            viewport,
            focus: false,
            title: None,
            width: 0,
            show_help: false,
            styles: None,
            keymap: ListKeyMap::default(),
            help: Help::new(),
        }
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

    /// Switches between substring and fuzzy matching.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.filter.set_mode(mode, &self.items);
        self.viewport.reset(self.filter.len());
        self
    }

    /// Shows the key help line under the rows.
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// The full, unfiltered sequence.
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Items in the active view, in sequence order.
    pub fn visible_items(&self) -> Vec<&Item<T>> {
        self.filter
            .view()
            .iter()
            .filter_map(|&i| self.items.get(i))
            .collect()
    }

    /// Number of items in the active view.
    pub fn len(&self) -> usize {
        self.filter.len()
    }

    /// Whether the active view is empty.
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty()
    }

    /// Cursor position in the active view.
    pub fn cursor(&self) -> usize {
        self.viewport.cursor()
    }

    /// First visible position in the active view.
    pub fn offset(&self) -> usize {
        self.viewport.offset()
    }

    /// Rows shown at once.
    pub fn height(&self) -> usize {
        self.viewport.height()
    }

    /// The current filter query.
    pub fn filter_query(&self) -> &str {
        self.filter.query()
    }

    /// Sequence index of the item under the cursor.
    pub fn selected_index(&self) -> Option<usize> {
        self.filter.original_index(self.viewport.cursor())
    }

    /// The item under the cursor; `None` when the view is empty.
    pub fn selected_item(&self) -> Option<&Item<T>> {
        self.selected_index().and_then(|i| self.items.get(i))
    }

    /// Replaces the sequence, keeping the query and clamping the cursor.
    pub fn set_items(&mut self, items: Vec<Item<T>>) {
        self.items = items;
        self.filter.refilter(&self.items);
        self.viewport.resize(self.filter.len());
    }

    /// Replaces the query. The cursor returns to the top.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter.set_query(query, &self.items);
        self.viewport.reset(self.filter.len());
    }

    /// Moves the cursor to `index` in the active view, clamped.
    pub fn set_selected(&mut self, index: usize) {
        self.viewport.set_cursor(index);
    }

    /// Changes the number of visible rows.
    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height);
    }

    /// Changes the render width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
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
            Action::FilterChar(c) => {
                self.filter.append_char(c, &self.items);
                self.viewport.reset(self.filter.len());
            }
            Action::FilterBackspace => {
                if self.filter.backspace(&self.items) {
                    self.viewport.reset(self.filter.len());
                }
            }
            Action::FilterClear => {
                if self.filter.is_active() {
                    self.filter.clear(&self.items);
                    self.viewport.reset(self.filter.len());
                }
            }
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
