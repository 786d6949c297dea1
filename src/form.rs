//! Forms: ordered text fields with per-field validation.
//!
//! A [`Form`] owns a list of [`Field`]s, each wrapping a text input. Focus
//! moves between fields without wrapping around. Whenever an edit changes
//! the focused field's value, that field is re-validated: a required field
//! must not be empty, and a field's validator must accept the value. The
//! resulting message replaces the field's previous error.
//!
//! ```rust
//! use wizard_widgets::form::{Field, Form, FormError};
//! use wizard_widgets::{Action, Component};
//!
//! let mut form = Form::new(vec![
//!     Field::new("name", "Name").required(true),
//!     Field::new("port", "Port").with_validator(|v| {
//!         v.parse::<u16>().map(|_| ()).map_err(|_| "not a port".to_string())
//!     }),
//! ]);
//! form.focus();
//!
//! assert!(matches!(form.submit(), Err(FormError::Required { .. })));
//!
//! form.handle(Action::Insert("api".to_string()));
//! form.handle(Action::NextField);
//! form.handle(Action::Insert("8080".to_string()));
//!
//! let values = form.submit().expect("valid form");
//! assert_eq!(values.get("port"), Some("8080"));
//! ```

use crate::action::Action;
use crate::key::{Binding, KeyMap, KeyPress};
use crate::style::{self, Role, SharedStyle};
use crate::textinput::{self, EchoMode, ValidateFunc};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use thiserror::Error;
use tracing::debug;

/// Why a form could not be submitted. Names the first invalid field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty.
    #[error("{label} is required")]
    Required {
        /// Field key.
        key: String,
        /// Field label.
        label: String,
    },
    /// A field's validator rejected its value.
    #[error("{label}: {message}")]
    Invalid {
        /// Field key.
        key: String,
        /// Field label.
        label: String,
        /// Validator message.
        message: String,
    },
}

impl FormError {
    /// Key of the offending field.
    pub fn key(&self) -> &str {
        match self {
            FormError::Required { key, .. } | FormError::Invalid { key, .. } => key,
        }
    }

    fn field_message(&self) -> String {
        match self {
            FormError::Required { .. } => self.to_string(),
            FormError::Invalid { message, .. } => message.clone(),
        }
    }
}

/// A labelled text field.
pub struct Field {
    key: String,
    label: String,
    input: textinput::Model,
    required: bool,
    validator: Option<ValidateFunc>,
    error: Option<String>,
}

impl Field {
    /// Creates an optional field; `key` identifies it in submitted values.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        let mut input = textinput::new();
        input.set_prompt("");
        Self {
            key: key.into(),
            label: label.into(),
            input,
            required: false,
            validator: None,
            error: None,
        }
    }

    /// Marks the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Adds a validator run on non-empty values of required fields and on
    /// every value of optional ones.
    pub fn with_validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(f));
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.input.set_placeholder(placeholder);
        self
    }

    /// Sets the initial value.
    pub fn with_value(mut self, value: &str) -> Self {
        self.input.set_value(value);
        self
    }

    /// Sets the echo mode, e.g. for passwords.
    pub fn with_echo_mode(mut self, mode: EchoMode) -> Self {
        self.input.set_echo_mode(mode);
        self
    }

    /// Caps the value length.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.input.set_char_limit(limit);
        self
    }

    /// Field key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the field must be filled in.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Current value.
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// Error from the last validation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The underlying input.
    pub fn input(&self) -> &textinput::Model {
        &self.input
    }

    /// Mutable access to the underlying input. Changes made through it are
    /// not validated until the next edit or [`Form::validate`].
    pub fn input_mut(&mut self) -> &mut textinput::Model {
        &mut self.input
    }

    fn check(&self) -> Result<(), FormError> {
        let value = self.input.value();
        if self.required && value.is_empty() {
            return Err(FormError::Required {
                key: self.key.clone(),
                label: self.label.clone(),
            });
        }
        if let Some(validator) = &self.validator {
            validator(&value).map_err(|message| FormError::Invalid {
                key: self.key.clone(),
                label: self.label.clone(),
                message,
            })?;
        }
        Ok(())
    }

    fn validate(&mut self) -> bool {
        match self.check() {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(e) => {
                debug!(field = %self.key, error = %e, "field failed validation");
                self.error = Some(e.field_message());
                false
            }
        }
    }
}

/// Submitted values in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    /// Value of the field with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `(key, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for FormValues {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Key bindings for moving between fields.
#[derive(Debug, Clone)]
pub struct FormKeyMap {
    /// Focus the next field.
    pub next_field: Binding,
    /// Focus the previous field.
    pub prev_field: Binding,
}

impl Default for FormKeyMap {
    fn default() -> Self {
        Self {
            next_field: Binding::new(vec![
                KeyPress::from(KeyCode::Tab),
                KeyPress::from(KeyCode::Down),
            ])
            .with_help("tab/↓", "next"),
            prev_field: Binding::new(vec![
                KeyPress::from(KeyCode::BackTab),
                KeyPress::from(KeyCode::Up),
            ])
            .with_help("shift+tab/↑", "prev"),
        }
    }
}

impl FormKeyMap {
    /// Resolves field navigation keys.
    pub fn resolve(&self, msg: &KeyMsg) -> Option<Action> {
        if self.next_field.matches(msg) {
            Some(Action::NextField)
        } else if self.prev_field.matches(msg) {
            Some(Action::PrevField)
        } else {
            None
        }
    }
}

impl KeyMap for FormKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next_field, &self.prev_field]
    }
}

/// An ordered set of fields with one focused at a time.
pub struct Form {
    fields: Vec<Field>,
    focus_index: usize,
    focus: bool,
    title: Option<String>,
    styles: Option<SharedStyle>,
    /// Navigation bindings used by [`Form::update`].
    pub keymap: FormKeyMap,
}

impl Form {
    /// Creates an unfocused form with the first field active.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focus_index: 0,
            focus: false,
            title: None,
            styles: None,
            keymap: FormKeyMap::default(),
        }
    }

    /// Sets the title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attaches a style provider to the form and its inputs.
    pub fn with_styles(mut self, styles: SharedStyle) -> Self {
        for field in &mut self.fields {
            field.input.set_styles(styles.clone());
        }
        self.styles = Some(styles);
        self
    }

    /// The fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The field with `key`.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Index of the active field.
    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Makes field `index` active, clamped to the last field.
    pub fn set_focus_index(&mut self, index: usize) {
        self.focus_index = index.min(self.fields.len().saturating_sub(1));
        self.sync_input_focus();
    }

    fn sync_input_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            if self.focus && i == self.focus_index {
                field.input.focus();
            } else {
                field.input.blur();
            }
        }
    }

    /// Applies one action. Ignored while unfocused.
    ///
    /// Navigation stops at the first and last field. Text actions go to the
    /// active field, which is re-validated when its value changes.
    pub fn handle(&mut self, action: Action) {
        if !self.focus || self.fields.is_empty() {
            return;
        }
        match action {
            Action::NextField | Action::MoveDown => {
                self.set_focus_index(self.focus_index + 1);
            }
            Action::PrevField | Action::MoveUp => {
                self.set_focus_index(self.focus_index.saturating_sub(1));
            }
            action => {
                let Some(field) = self.fields.get_mut(self.focus_index) else {
                    return;
                };
                let before = field.input.value();
                field.input.handle(action);
                if field.input.value() != before {
                    field.validate();
                }
            }
        }
    }

    /// Handles navigation keys and forwards everything else to the active
    /// input.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        if let Some(action) = msg
            .downcast_ref::<KeyMsg>()
            .and_then(|k| self.keymap.resolve(k))
        {
            self.handle(action);
            return None;
        }
        let field = self.fields.get_mut(self.focus_index)?;
        let before = field.input.value();
        let cmd = field.input.update(msg);
        if field.input.value() != before {
            field.validate();
        }
        cmd
    }

    /// Re-validates every field and returns whether all passed.
    pub fn validate(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |ok, field| field.validate() && ok)
    }

    /// Whether every field passed its last validation. Does not re-run
    /// validators.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.error.is_none())
    }

    /// Current values in field order.
    pub fn values(&self) -> FormValues {
        FormValues(
            self.fields
                .iter()
                .map(|f| (f.key.clone(), f.input.value()))
                .collect(),
        )
    }

    /// Validates everything and returns the values, or the error of the
    /// first invalid field.
    pub fn submit(&mut self) -> Result<FormValues, FormError> {
        self.validate();
        if let Some(err) = self.fields.iter().find_map(|f| f.check().err()) {
            return Err(err);
        }
        Ok(self.values())
    }

    /// Renders each field as a label line, the input, and its error.
    pub fn view(&self) -> String {
        let style = style::resolve(&self.styles);
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(style.paint(Role::Title, title));
        }
        for (i, field) in self.fields.iter().enumerate() {
            let active = self.focus && i == self.focus_index;
            let marker = if active { style.cursor_marker() } else { " ".to_string() };
            let label = if field.required {
                format!("{} *", field.label)
            } else {
                field.label.clone()
            };
            let role = if active { Role::Primary } else { Role::Muted };
            lines.push(format!("{} {}", marker, style.paint(role, &label)));
            lines.push(format!("  {}", field.input.view()));
            if let Some(err) = &field.error {
                lines.push(format!("  {}", style.paint(Role::Error, err)));
            }
        }
        lines.join("\n")
    }
}

impl Component for Form {
    fn focus(&mut self) {
        self.focus = true;
        self.sync_input_focus();
    }

    fn blur(&mut self) {
        self.focus = false;
        self.sync_input_focus();
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
