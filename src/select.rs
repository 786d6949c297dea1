//! Single-choice select.
//!
//! A select is a list without a filter: the cursor walks the sequence
//! directly and the item under it is the choice. A disabled item can be
//! navigated onto but is never reported as the choice.
//!
//! ```rust
//! use wizard_widgets::item::items_from;
//! use wizard_widgets::select::Model;
//! use wizard_widgets::{Action, Component};
//!
//! let mut select = Model::new(items_from(&["small", "medium", "large"]), 5);
//! select.focus();
//! select.handle(Action::End);
//! assert_eq!(select.selected().map(|i| i.title()), Some("large"));
//! ```

use crate::action::Action;
use crate::help::Help;
use crate::item::Item;
use crate::key::SelectKeyMap;
use crate::snapshot::{self, ListSnapshot, RowView, ScrollIndicator};
use crate::style::{self, SharedStyle};
use crate::viewport::ViewportCursor;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// Select state.
pub struct Model<T> {
    items: Vec<Item<T>>,
    viewport: ViewportCursor,
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
    /// Creates an unfocused select showing `height` rows at a time.
    pub fn new(items: Vec<Item<T>>, height: usize) -> Self {
        let viewport = ViewportCursor::new(items.len(), height);
        Self {
            items,
            viewport,
            focus: false,
            title: None,
            width: 0,
            show_help: false,
            styles: None,
            keymap: SelectKeyMap::default().without_toggles(),
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

    /// The current choice: the item under the cursor unless it is disabled.
    pub fn selected(&self) -> Option<&Item<T>> {
        self.items
            .get(self.viewport.cursor())
            .filter(|item| !item.is_disabled())
    }

    /// Value of the current choice.
    pub fn value(&self) -> Option<&T> {
        self.selected().map(Item::value)
    }

    /// Replaces the sequence, clamping the cursor.
    pub fn set_items(&mut self, items: Vec<Item<T>>) {
        self.items = items;
        self.viewport.resize(self.items.len());
    }

    /// Moves the cursor to `index`, clamped.
    pub fn set_selected(&mut self, index: usize) {
        self.viewport.set_cursor(index);
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

    /// What the select currently shows.
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
                    checked: None,
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
            status: None,
            focused: self.focus,
        }
    }

    /// Renders the select.
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
