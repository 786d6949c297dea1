//! Text measurement, truncation and sanitizing helpers.
//!
//! Everything in this module works in terminal display columns rather than
//! code points: wide characters count as two columns, control and combining
//! characters as zero, and ANSI escape sequences are ignored when measuring
//! already-styled text.
//!
//! # Examples
//!
//! ```rust
//! use wizard_widgets::text::{display_width, truncate, ELLIPSIS};
//!
//! assert_eq!(display_width("日本"), 4);
//! assert_eq!(truncate("Strawberry", 6, ELLIPSIS, display_width), "Straw…");
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Marker appended to text cut short by [`truncate`].
pub const ELLIPSIS: &str = "…";

/// Returns the number of terminal columns `s` occupies.
///
/// ANSI escape sequences are stripped first so styled strings measure the
/// same as their plain text.
pub fn display_width(s: &str) -> usize {
    if s.contains('\x1b') {
        plain_width(&strip_ansi_escapes::strip_str(s))
    } else {
        plain_width(s)
    }
}

fn plain_width(s: &str) -> usize {
    s.chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

/// Cuts `s` down to at most `width` display columns.
///
/// Text that already fits is returned unchanged. Otherwise whole grapheme
/// clusters are kept while they fit in `width - width(marker)` columns and
/// `marker` is appended. When `width` is too narrow to hold the marker, the
/// text is cut hard without one. `measure` decides what a column is, which
/// lets callers route measuring through a style provider.
pub fn truncate<F>(s: &str, width: usize, marker: &str, measure: F) -> String
where
    F: Fn(&str) -> usize,
{
    if measure(s) <= width {
        return s.to_string();
    }

    let marker_width = measure(marker);
    let (budget, tail) = if marker_width <= width {
        (width - marker_width, marker)
    } else {
        (width, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for grapheme in s.graphemes(true) {
        let w = measure(grapheme);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(grapheme);
    }
    out.push_str(tail);
    out
}

/// Pads `s` with trailing spaces until it is `width` columns wide.
pub fn pad_right<F>(s: &str, width: usize, measure: F) -> String
where
    F: Fn(&str) -> usize,
{
    let w = measure(s);
    if w >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - w);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - w));
    out
}

/// Cleans text before it is inserted into a single-line buffer.
///
/// Tabs and newlines are replaced with configurable strings and any other
/// control character is dropped.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    replace_newline: String,
    replace_tab: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            replace_newline: " ".to_string(),
            replace_tab: "    ".to_string(),
        }
    }
}

impl Sanitizer {
    /// Creates a sanitizer that turns newlines into a space and tabs into four spaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement for `\n` and `\r\n`.
    pub fn with_newline(mut self, repl: impl Into<String>) -> Self {
        self.replace_newline = repl.into();
        self
    }

    /// Sets the replacement for `\t`.
    pub fn with_tab(mut self, repl: impl Into<String>) -> Self {
        self.replace_tab = repl.into();
        self
    }

    /// Returns the sanitized characters of `s`.
    pub fn sanitize(&self, s: &str) -> Vec<char> {
        let mut out = Vec::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' if chars.peek() == Some(&'\n') => {
                    chars.next();
                    out.extend(self.replace_newline.chars());
                }
                '\n' | '\r' => out.extend(self.replace_newline.chars()),
                '\t' => out.extend(self.replace_tab.chars()),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_ignores_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
    }

    #[test]
    fn test_truncate_fits_unchanged() {
        assert_eq!(truncate("short", 10, ELLIPSIS, display_width), "short");
        assert_eq!(truncate("exact", 5, ELLIPSIS, display_width), "exact");
    }

    #[test]
    fn test_truncate_appends_marker() {
        let out = truncate("Strawberry", 6, ELLIPSIS, display_width);
        assert_eq!(out, "Straw…");
        assert_eq!(display_width(&out), 6);
    }

    #[test]
    fn test_truncate_wide_chars_by_columns() {
        // Each ideograph is two columns; only one fits beside the marker.
        let out = truncate("日本語", 4, ELLIPSIS, display_width);
        assert_eq!(out, "日…");
        assert!(display_width(&out) <= 4);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("abc", 0, ELLIPSIS, display_width), "");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4, display_width), "ab  ");
        assert_eq!(pad_right("abcd", 2, display_width), "abcd");
        assert_eq!(pad_right("日", 3, display_width), "日 ");
    }

    #[test]
    fn test_sanitizer_defaults() {
        let s = Sanitizer::new();
        let out: String = s.sanitize("a\tb\nc\r\nd\x07").into_iter().collect();
        assert_eq!(out, "a    b c d");
    }

    #[test]
    fn test_sanitizer_custom() {
        let s = Sanitizer::new().with_tab(" ").with_newline(" | ");
        let out: String = s.sanitize("x\ty\nz").into_iter().collect();
        assert_eq!(out, "x y | z");
    }
}
