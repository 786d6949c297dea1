//! Style providers.
//!
//! Widgets never reach for a global theme. Each constructor accepts an
//! optional [`SharedStyle`]; when none is given the widget renders through
//! [`PlainStyle`], which emits unstyled text carrying the same information
//! (`[x]` / `[ ]` check boxes, `>` cursor marker, ASCII borders).
//!
//! [`Theme`] is the `lipgloss`-backed provider with adaptive colors that work
//! on both light and dark terminals.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wizard_widgets::style::{PlainStyle, Role, SharedStyle, StyleProvider, Theme};
//!
//! assert_eq!(PlainStyle.paint(Role::Error, "oops"), "oops");
//! assert_eq!(PlainStyle.checkbox(true), "[x]");
//!
//! let themed: SharedStyle = Arc::new(Theme::default());
//! assert!(themed.paint(Role::Error, "oops").contains("oops"));
//! ```

use crate::spinner;
use crate::text;
use lipgloss_extras::prelude::*;
use std::sync::Arc;

/// Named style slots a widget can ask a provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Regular foreground text.
    Primary,
    /// De-emphasized text: hints, disabled rows, odd table rows.
    Muted,
    /// Validation and failure messages.
    Error,
    /// Completed or positive state.
    Success,
    /// Attention without failure.
    Warning,
    /// Widget titles and table headers.
    Title,
    /// A text input that has focus.
    InputFocused,
    /// A text input without focus.
    InputBlurred,
    /// The row under the cursor.
    RowSelected,
    /// Any other row.
    RowUnselected,
    /// Table and box borders.
    Border,
    /// Spinner frames.
    Spinner,
}

/// Glyphs used to draw table borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// `┌`
    pub top_left: &'static str,
    /// `┬`
    pub top_mid: &'static str,
    /// `┐`
    pub top_right: &'static str,
    /// `├`
    pub mid_left: &'static str,
    /// `┼`
    pub mid_mid: &'static str,
    /// `┤`
    pub mid_right: &'static str,
    /// `└`
    pub bottom_left: &'static str,
    /// `┴`
    pub bottom_mid: &'static str,
    /// `┘`
    pub bottom_right: &'static str,
    /// `─`
    pub horizontal: &'static str,
    /// `│`
    pub vertical: &'static str,
}

/// Plain ASCII borders.
pub const ASCII_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: "+",
    top_mid: "+",
    top_right: "+",
    mid_left: "+",
    mid_mid: "+",
    mid_right: "+",
    bottom_left: "+",
    bottom_mid: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
};

/// Light box-drawing borders.
pub const NORMAL_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: "┌",
    top_mid: "┬",
    top_right: "┐",
    mid_left: "├",
    mid_mid: "┼",
    mid_right: "┤",
    bottom_left: "└",
    bottom_mid: "┴",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
};

/// Rounded box-drawing borders.
pub const ROUNDED_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    ..NORMAL_BORDER
};

/// Capability widgets render through.
///
/// Only [`StyleProvider::paint`] is required; everything else has a
/// plain-text default.
pub trait StyleProvider: Send + Sync {
    /// Applies the style for `role` to `text`.
    fn paint(&self, role: Role, text: &str) -> String;

    /// Check-box glyph for a multi-select row.
    fn checkbox(&self, checked: bool) -> String {
        if checked { "[x]" } else { "[ ]" }.to_string()
    }

    /// Marker drawn in front of the row under the cursor.
    fn cursor_marker(&self) -> String {
        ">".to_string()
    }

    /// Renders the text cursor of an input sitting on `under`.
    fn text_cursor(&self, under: &str) -> String {
        if under == " " {
            "_".to_string()
        } else {
            under.to_string()
        }
    }

    /// Border glyph set for tables.
    fn border(&self) -> &BorderGlyphs {
        &ASCII_BORDER
    }

    /// Animation frames for the spinner style called `name`.
    fn spinner_frames(&self, name: &str) -> Option<Vec<String>> {
        spinner::builtin(name).map(|s| s.frames.clone())
    }

    /// Terminal columns `text` occupies.
    fn display_width(&self, text: &str) -> usize {
        text::display_width(text)
    }
}

/// Reference-counted provider shared between widgets.
pub type SharedStyle = Arc<dyn StyleProvider>;

/// Zero-dependency provider used when a widget has no style attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl StyleProvider for PlainStyle {
    fn paint(&self, _role: Role, text: &str) -> String {
        text.to_string()
    }
}

static PLAIN: PlainStyle = PlainStyle;

/// Returns the attached provider or the plain fallback.
pub(crate) fn resolve(style: &Option<SharedStyle>) -> &dyn StyleProvider {
    match style {
        Some(s) => s.as_ref(),
        None => &PLAIN,
    }
}

/// `lipgloss` styles for every [`Role`].
///
/// Fields are public so applications can adjust single slots:
///
/// ```rust
/// use lipgloss_extras::prelude::*;
/// use wizard_widgets::style::Theme;
///
/// let mut theme = Theme::default();
/// theme.error = Style::new().foreground(Color::from("9")).bold(true);
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    /// [`Role::Primary`]
    pub primary: Style,
    /// [`Role::Muted`]
    pub muted: Style,
    /// [`Role::Error`]
    pub error: Style,
    /// [`Role::Success`]
    pub success: Style,
    /// [`Role::Warning`]
    pub warning: Style,
    /// [`Role::Title`]
    pub title: Style,
    /// [`Role::InputFocused`]
    pub input_focused: Style,
    /// [`Role::InputBlurred`]
    pub input_blurred: Style,
    /// [`Role::RowSelected`]
    pub row_selected: Style,
    /// [`Role::RowUnselected`]
    pub row_unselected: Style,
    /// [`Role::Border`]
    pub border: Style,
    /// [`Role::Spinner`]
    pub spinner: Style,
    /// Style of the text cursor in inputs.
    pub text_cursor: Style,
    /// Glyph for a checked row.
    pub checked: String,
    /// Glyph for an unchecked row.
    pub unchecked: String,
    /// Marker in front of the cursor row.
    pub marker: String,
    /// Table border glyphs.
    pub borders: BorderGlyphs,
}

impl Default for Theme {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let accent = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };

        Self {
            primary: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            muted: Style::new().foreground(subdued.clone()),
            error: Style::new().foreground(AdaptiveColor {
                Light: "#D7005F",
                Dark: "#FF5F87",
            }),
            success: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            warning: Style::new().foreground(AdaptiveColor {
                Light: "#C47A00",
                Dark: "#ECFD65",
            }),
            title: Style::new().foreground(Color::from("230")).bold(true),
            input_focused: Style::new().foreground(accent.clone()),
            input_blurred: Style::new().foreground(subdued.clone()),
            row_selected: Style::new().foreground(accent.clone()).bold(true),
            row_unselected: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            border: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            spinner: Style::new().foreground(Color::from("205")),
            text_cursor: Style::new().reverse(true),
            checked: "◉".to_string(),
            unchecked: "○".to_string(),
            marker: "❯".to_string(),
            borders: NORMAL_BORDER,
        }
    }
}

impl Theme {
    /// Default theme with rounded table corners.
    pub fn rounded() -> Self {
        Self {
            borders: ROUNDED_BORDER,
            ..Self::default()
        }
    }

    fn style_for(&self, role: Role) -> &Style {
        match role {
            Role::Primary => &self.primary,
            Role::Muted => &self.muted,
            Role::Error => &self.error,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Title => &self.title,
            Role::InputFocused => &self.input_focused,
            Role::InputBlurred => &self.input_blurred,
            Role::RowSelected => &self.row_selected,
            Role::RowUnselected => &self.row_unselected,
            Role::Border => &self.border,
            Role::Spinner => &self.spinner,
        }
    }
}

impl StyleProvider for Theme {
    fn paint(&self, role: Role, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.style_for(role).render(text)
    }

    fn checkbox(&self, checked: bool) -> String {
        if checked {
            self.success.render(&self.checked)
        } else {
            self.muted.render(&self.unchecked)
        }
    }

    fn cursor_marker(&self) -> String {
        self.row_selected.render(&self.marker)
    }

    fn text_cursor(&self, under: &str) -> String {
        self.text_cursor.render(under)
    }

    fn border(&self) -> &BorderGlyphs {
        &self.borders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_is_identity() {
        for role in [Role::Primary, Role::Error, Role::RowSelected, Role::Border] {
            assert_eq!(PlainStyle.paint(role, "text"), "text");
        }
    }

    #[test]
    fn test_plain_glyphs() {
        assert_eq!(PlainStyle.checkbox(true), "[x]");
        assert_eq!(PlainStyle.checkbox(false), "[ ]");
        assert_eq!(PlainStyle.cursor_marker(), ">");
        assert_eq!(PlainStyle.border(), &ASCII_BORDER);
        assert_eq!(PlainStyle.text_cursor(" "), "_");
        assert_eq!(PlainStyle.text_cursor("a"), "a");
    }

    #[test]
    fn test_plain_spinner_frames_from_builtin() {
        let frames = PlainStyle.spinner_frames("line").expect("line frames");
        assert_eq!(frames, vec!["|", "/", "-", "\\"]);
        assert!(PlainStyle.spinner_frames("no-such-spinner").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_plain() {
        let none: Option<SharedStyle> = None;
        assert_eq!(resolve(&none).paint(Role::Muted, "x"), "x");
    }

    #[test]
    fn test_theme_keeps_text_content() {
        let theme = Theme::default();
        let painted = theme.paint(Role::Error, "bad input");
        assert_eq!(strip_ansi_escapes::strip_str(&painted), "bad input");
        assert_eq!(theme.display_width(&painted), 9);
        assert_eq!(theme.paint(Role::Primary, ""), "");
    }

    #[test]
    fn test_theme_borders() {
        assert_eq!(Theme::default().border().top_left, "┌");
        assert_eq!(Theme::rounded().border().top_left, "╭");
        assert_eq!(Theme::rounded().border().vertical, "│");
    }
}
