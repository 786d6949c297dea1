//! Snapshot and view for the list.

use super::Model;
use crate::snapshot::{self, ListSnapshot, RowView, ScrollIndicator};
use crate::style;

impl<T> Model<T> {
    /// What the list currently shows.
    pub fn snapshot(&self) -> ListSnapshot {
        let range = self.viewport.visible_range();
        let cursor = self.viewport.cursor();
        let rows = range
            .clone()
            .filter_map(|pos| {
                let index = self.filter.original_index(pos)?;
                let item = self.items.get(index)?;
                Some(RowView {
                    index,
                    title: item.title().to_string(),
                    description: item.description().to_string(),
                    is_cursor: pos == cursor,
                    checked: None,
                    disabled: item.is_disabled(),
                })
            })
            .collect();

        let scroll = self.viewport.is_scrollable().then(|| ScrollIndicator {
            total: self.viewport.len(),
            start: range.start,
            end: range.end,
        });

        ListSnapshot {
            title: self.title.clone(),
            query: self
                .filter
                .is_active()
                .then(|| self.filter.query().to_string()),
            total: self.viewport.len(),
            rows,
            scroll,
            status: None,
            focused: self.focus,
        }
    }

    /// Renders the list.
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
