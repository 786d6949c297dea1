//! Key bindings that resolve key presses into [`Action`]s.
//!
//! Decoding raw terminal input is the host application's job; this module
//! only offers a convenient default for applications built on `bubbletea-rs`.
//! A [`Binding`] is a set of key presses plus the help text shown for it, and
//! each widget family ships a key map whose `resolve` turns a [`KeyMsg`] into
//! the action the widget understands.
//!
//! ```rust
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use wizard_widgets::key::{Binding, SelectKeyMap};
//! use wizard_widgets::Action;
//!
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//! let msg = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::CONTROL };
//! assert!(save.matches(&msg));
//!
//! let keys = SelectKeyMap::default();
//! let down = KeyMsg { key: KeyCode::Char('j'), modifiers: KeyModifiers::NONE };
//! assert_eq!(keys.resolve(&down), Some(Action::MoveDown));
//! ```

use crate::action::Action;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Held modifiers.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Whether `msg` is this key press.
    ///
    /// Shift is ignored for characters and back-tab since terminals report
    /// it inconsistently for those keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key
            && normalize(self.code, self.modifiers) == normalize(msg.key, msg.modifiers)
    }
}

fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does, e.g. `"up"`.
    pub desc: String,
}

/// Key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Bindings a widget advertises in its help line.
pub trait KeyMap {
    /// Bindings for the one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Returns the printable character carried by `msg`, if any.
///
/// Presses with Control or Alt held are not text.
pub fn text_char(msg: &KeyMsg) -> Option<char> {
    match msg.key {
        KeyCode::Char(c)
            if !msg.modifiers.contains(KeyModifiers::CONTROL)
                && !msg.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Default bindings for the select and multi-select widgets.
#[derive(Debug, Clone)]
pub struct SelectKeyMap {
    /// Cursor up.
    pub up: Binding,
    /// Cursor down.
    pub down: Binding,
    /// Page up.
    pub page_up: Binding,
    /// Page down.
    pub page_down: Binding,
    /// First row.
    pub home: Binding,
    /// Last row.
    pub end: Binding,
    /// Toggle the cursor row.
    pub toggle: Binding,
    /// Toggle every row.
    pub toggle_all: Binding,
}

impl Default for SelectKeyMap {
    fn default() -> Self {
        Self {
            up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]).with_help("↓/j", "down"),
            page_up: Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h/pgup", "prev page"),
            page_down: Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l/pgdn", "next page"),
            home: Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            end: Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
                .with_help("space/x", "toggle"),
            toggle_all: Binding::new(vec![
                KeyPress::from(KeyCode::Char('a')),
                KeyPress::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
            ])
            .with_help("a", "toggle all"),
        }
    }
}

impl SelectKeyMap {
    /// Resolves `msg` into an action, or `None` when nothing is bound to it.
    pub fn resolve(&self, msg: &KeyMsg) -> Option<Action> {
        let action = if self.up.matches(msg) {
            Action::MoveUp
        } else if self.down.matches(msg) {
            Action::MoveDown
        } else if self.page_up.matches(msg) {
            Action::PageUp
        } else if self.page_down.matches(msg) {
            Action::PageDown
        } else if self.home.matches(msg) {
            Action::Home
        } else if self.end.matches(msg) {
            Action::End
        } else if self.toggle.matches(msg) {
            Action::ToggleCurrent
        } else if self.toggle_all.matches(msg) {
            Action::ToggleAll
        } else {
            return None;
        };
        Some(action)
    }

    /// Disables the toggle bindings, for single-choice widgets.
    pub fn without_toggles(mut self) -> Self {
        self.toggle.set_enabled(false);
        self.toggle_all.set_enabled(false);
        self
    }
}

impl KeyMap for SelectKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        [&self.up, &self.down, &self.toggle, &self.toggle_all]
            .into_iter()
            .filter(|b| b.enabled())
            .collect()
    }
}
