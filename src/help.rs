//! One-line help rendered from key bindings.
//!
//! Widgets expose their bindings through [`KeyMap`]; [`Help`] lays the
//! enabled ones out as `key desc • key desc`, dropping whatever does not fit
//! the configured width and marking the cut with an ellipsis.
//!
//! ```rust
//! use wizard_widgets::help::Help;
//! use wizard_widgets::key::SelectKeyMap;
//! use wizard_widgets::style::PlainStyle;
//!
//! let help = Help::new();
//! let line = help.view(&SelectKeyMap::default(), &PlainStyle);
//! assert!(line.starts_with("↑/k up • ↓/j down"));
//! ```

use crate::key::{Binding, KeyMap};
use crate::style::{Role, StyleProvider};

/// Settings for the help line.
#[derive(Debug, Clone)]
pub struct Help {
    /// Maximum width in columns; 0 for unbounded.
    pub width: usize,
    /// Text between entries.
    pub separator: String,
    /// Marker shown when entries were dropped.
    pub ellipsis: String,
}

impl Default for Help {
    fn default() -> Self {
        Self {
            width: 0,
            separator: " • ".to_string(),
            ellipsis: "…".to_string(),
        }
    }
}

impl Help {
    /// Creates an unbounded help line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the line to `width` columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short help of `keymap`.
    pub fn view(&self, keymap: &dyn KeyMap, style: &dyn StyleProvider) -> String {
        self.short_help_view(&keymap.short_help(), style)
    }

    /// Renders `bindings` on one line, skipping disabled ones.
    pub fn short_help_view(&self, bindings: &[&Binding], style: &dyn StyleProvider) -> String {
        let separator = style.paint(Role::Muted, &self.separator);
        let mut out = String::new();
        let mut total_width = 0;

        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                style.paint(Role::Primary, &help.key),
                style.paint(Role::Muted, &help.desc)
            );
            let item_width = style.display_width(&item);

            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(" {}", style.paint(Role::Muted, &self.ellipsis));
                if total_width + style.display_width(&tail) < self.width {
                    out.push_str(&tail);
                }
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }
}
