//! Filterable list.
//!
//! The list composes a [`crate::filter::FilterEngine`] with a
//! [`crate::viewport::ViewportCursor`]: typing narrows the view, the cursor
//! moves through whatever remains, and every change to the query puts the
//! cursor back at the top of the new view.
//!
//! ```rust
//! use wizard_widgets::item::items_from;
//! use wizard_widgets::list::Model;
//! use wizard_widgets::{Action, Component};
//!
//! let mut list = Model::new(items_from(&["Apple", "Banana", "Cherry"]), 2);
//! list.focus();
//! list.handle(Action::FilterChar('a'));
//! list.handle(Action::FilterChar('n'));
//! assert_eq!(list.selected_item().map(|i| i.title()), Some("Banana"));
//!
//! assert_eq!(list.view(), "Filter: an\n> Banana");
//! ```

mod keys;
mod model;
mod rendering;

#[cfg(test)]
mod tests;

/// Key bindings for list navigation and filtering.
pub use keys::ListKeyMap;

/// The list component.
pub use model::Model;
