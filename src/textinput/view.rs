//! View rendering for the text input.

use super::model::Model;
use super::types::EchoMode;
use crate::style::{self, Role, StyleProvider};

impl Model {
    /// Renders the prompt, the visible window of the value and the cursor.
    pub fn view(&self) -> String {
        let style = style::resolve(&self.styles);
        let role = self.text_role();

        if self.buffer.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view(style);
        }

        let value = self.buffer.chars();
        let end = self.offset_right.min(value.len());
        let start = self.offset.min(end);
        let visible = self.echo_transform(&value[start..end]);
        let pos = match self.echo_mode {
            EchoMode::EchoNone => 0,
            _ => self.buffer.position().saturating_sub(start).min(visible.len()),
        };

        let before: String = visible[..pos].iter().collect();
        let mut v = style.paint(role, &before);

        match visible.get(pos) {
            Some(&under) => {
                let under = under.to_string();
                if self.focus {
                    v.push_str(&style.text_cursor(&under));
                } else {
                    v.push_str(&style.paint(role, &under));
                }
                let after: String = visible[pos + 1..].iter().collect();
                v.push_str(&style.paint(role, &after));
            }
            None => {
                if self.focus {
                    v.push_str(&style.text_cursor(" "));
                }
            }
        }

        format!("{}{}", style.paint(role, &self.prompt), v)
    }

    fn text_role(&self) -> Role {
        if self.focus {
            Role::InputFocused
        } else {
            Role::InputBlurred
        }
    }

    pub(super) fn placeholder_view(&self, style: &dyn StyleProvider) -> String {
        let prompt = style.paint(self.text_role(), &self.prompt);
        let mut chars = self.placeholder.chars();
        if !self.focus {
            return format!("{}{}", prompt, style.paint(Role::Muted, &self.placeholder));
        }
        let first = chars.next().map(String::from).unwrap_or_default();
        let rest: String = chars.collect();
        format!(
            "{}{}{}",
            prompt,
            style.text_cursor(&first),
            style.paint(Role::Muted, &rest)
        )
    }

    pub(super) fn echo_transform(&self, v: &[char]) -> Vec<char> {
        match self.echo_mode {
            EchoMode::EchoPassword => vec![self.echo_character; v.len()],
            EchoMode::EchoNone => Vec::new(),
            EchoMode::EchoNormal => v.to_vec(),
        }
    }
}
