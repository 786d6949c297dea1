#![warn(missing_docs)]

//! # wizard-widgets
//!
//! Selection, input, form and table widgets for keyboard-driven terminal
//! wizards, built to plug into [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! Every widget is a plain state holder. Input arrives as semantic
//! [`Action`]s through `handle`, or as raw `bubbletea-rs` messages through
//! `update`, which resolves keys with the widget's key map. Rendering is a
//! side-effect free `view()` that paints through an optional
//! [`style::StyleProvider`]; without one, widgets emit plain text.
//!
//! ## Components
//!
//! - **Selection**: [`list::Model`] (filterable), [`select::Model`],
//!   [`multiselect::Model`], all sharing [`viewport::ViewportCursor`]
//! - **Input**: [`textinput::Model`], [`form::Form`]
//! - **Display**: [`table::Model`], [`progress::Model`], [`spinner::Model`],
//!   [`help::Help`]
//!
//! ## Focus
//!
//! Interactive widgets start unfocused and ignore actions until focused.
//! Programmatic setters work regardless.
//!
//! ```rust
//! use wizard_widgets::prelude::*;
//!
//! let mut pick = MultiSelect::new(items_from(&["A", "B", "C"]), 5).with_limits(0, 2);
//! pick.handle(Action::ToggleCurrent);
//! assert_eq!(pick.selection().count(), 0);
//!
//! pick.focus();
//! pick.handle(Action::ToggleCurrent);
//! pick.handle(Action::MoveDown);
//! pick.handle(Action::ToggleCurrent);
//! pick.handle(Action::MoveDown);
//! pick.handle(Action::ToggleCurrent);
//! assert_eq!(pick.selected_labels(), vec!["A", "B"]);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use wizard_widgets::prelude::*;
//!
//! struct App {
//!     list: List<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut list = List::new(items_from(&["Apple", "Banana"]), 5).with_title("Fruit");
//!         list.focus();
//!         (Self { list }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```

pub mod action;
pub mod filter;
pub mod form;
pub mod help;
pub mod item;
pub mod key;
pub mod list;
pub mod multiselect;
pub mod progress;
pub mod select;
pub mod selection;
pub mod snapshot;
pub mod spinner;
pub mod style;
pub mod table;
pub mod text;
pub mod textinput;
pub mod viewport;

/// Focus handling shared by the interactive widgets.
///
/// A blurred widget ignores every action delivered through `handle` or
/// `update` and renders in its inactive style.
///
/// ```rust
/// use wizard_widgets::prelude::*;
///
/// let mut input = textinput_new();
/// assert!(!input.focused());
///
/// input.focus();
/// assert!(input.focused());
///
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Lets the widget receive input.
    fn focus(&mut self);

    /// Stops the widget from receiving input.
    fn blur(&mut self);

    /// Whether the widget currently receives input.
    fn focused(&self) -> bool;
}

pub use action::Action;
pub use filter::{FilterEngine, MatchMode};
pub use form::{Field, Form, FormError, FormValues};
pub use help::Help;
pub use item::{items_from, Item, Searchable, Selectable};
pub use key::{Binding, KeyMap, KeyPress, SelectKeyMap};
pub use list::{ListKeyMap, Model as List};
pub use multiselect::Model as MultiSelect;
pub use progress::Model as Progress;
pub use select::Model as Select;
pub use selection::SelectionSet;
pub use snapshot::{ListSnapshot, RowView, ScrollIndicator};
pub use spinner::{Model as Spinner, SpinnerOption, TickMsg as SpinnerTickMsg};
pub use style::{PlainStyle, Role, SharedStyle, StyleProvider, Theme};
pub use table::{Column, Model as Table, TableRow};
pub use textinput::{
    new as textinput_new, EchoMode, Model as TextInput, PasteErrMsg, PasteMsg, ValidateFunc,
};
pub use viewport::ViewportCursor;

/// Everything needed to build a wizard screen with one `use`.
///
/// ```rust
/// use wizard_widgets::prelude::*;
///
/// let mut select = Select::new(items_from(&["dev", "prod"]), 3);
/// select.focus();
/// select.handle(Action::MoveDown);
/// assert_eq!(select.value().map(String::as_str), Some("prod"));
/// ```
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::form::{Field, Form, FormError, FormValues};
    pub use crate::help::Help;
    pub use crate::item::{items_from, Item};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::list::Model as List;
    pub use crate::multiselect::Model as MultiSelect;
    pub use crate::progress::Model as Progress;
    pub use crate::select::Model as Select;
    pub use crate::spinner::Model as Spinner;
    pub use crate::style::{SharedStyle, StyleProvider, Theme};
    pub use crate::table::{Column, Model as Table, TableRow};
    pub use crate::textinput::{new as textinput_new, EchoMode, Model as TextInput};
    pub use crate::Component;
}
