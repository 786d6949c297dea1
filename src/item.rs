//! Items shown by the list, select and multi-select widgets.
//!
//! An [`Item`] wraps an application payload with the text the widgets need:
//! a title that is displayed, an optional description, optional extra filter
//! text, and a disabled flag. An item's identity is its index in the
//! sequence handed to the widget, never its position in a filtered view.

use std::fmt;

/// A row in a selection widget carrying a payload of type `T`.
///
/// ```rust
/// use wizard_widgets::item::Item;
///
/// let item = Item::new("postgres", "PostgreSQL")
///     .with_description("Relational database")
///     .with_filter_text("sql pg");
/// assert_eq!(item.title(), "PostgreSQL");
/// assert_eq!(item.search_text(), "PostgreSQL Relational database sql pg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    value: T,
    title: String,
    description: String,
    filter_text: String,
    disabled: bool,
}

impl<T> Item<T> {
    /// Creates an enabled item showing `title`.
    pub fn new(value: T, title: impl Into<String>) -> Self {
        Self {
            value,
            title: title.into(),
            description: String::new(),
            filter_text: String::new(),
            disabled: false,
        }
    }

    /// Adds a description shown next to the title and matched by filters.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds text that filters match but that is never displayed.
    pub fn with_filter_text(mut self, filter_text: impl Into<String>) -> Self {
        self.filter_text = filter_text.into();
        self
    }

    /// Marks the item as disabled. Disabled items can be navigated onto but
    /// never selected.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the item and returns its payload.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Display text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description, empty when not set.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the item is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Text that filters match against: title, description and filter text,
    /// space separated, skipping empty parts.
    pub fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.filter_text.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Title plus description as a single display line.
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.description)
        }
    }
}

impl<T> fmt::Display for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl From<&str> for Item<String> {
    fn from(s: &str) -> Self {
        Item::new(s.to_string(), s)
    }
}

impl From<String> for Item<String> {
    fn from(s: String) -> Self {
        Item::new(s.clone(), s)
    }
}

/// Anything filters can search.
pub trait Searchable {
    /// The text a filter query is matched against.
    fn search_text(&self) -> String;
}

impl<T> Searchable for Item<T> {
    fn search_text(&self) -> String {
        Item::search_text(self)
    }
}

/// Anything a selection set can toggle.
pub trait Selectable {
    /// Disabled entries can never be selected.
    fn is_disabled(&self) -> bool;
}

impl<T> Selectable for Item<T> {
    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Builds string items from a slice of labels.
pub fn items_from<S: AsRef<str>>(labels: &[S]) -> Vec<Item<String>> {
    labels.iter().map(|s| Item::from(s.as_ref())).collect()
}
