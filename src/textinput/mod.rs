//! Single-line text input.
//!
//! The input wraps a [`TextBuffer`] with a prompt, a placeholder, echo
//! modes for secrets, horizontal scrolling within a width, an optional
//! validator and clipboard paste.
//!
//! # Basic Usage
//!
//! ```rust
//! use wizard_widgets::textinput::new;
//! use wizard_widgets::{Action, Component};
//!
//! let mut input = new();
//! input.set_placeholder("Project name");
//! assert_eq!(input.view(), "> Project name");
//!
//! input.focus();
//! input.handle(Action::Insert("demo".to_string()));
//! input.handle(Action::CursorLeft);
//! input.handle(Action::DeleteBackward);
//! assert_eq!(input.value(), "deo");
//! ```
//!
//! # Echo Modes
//!
//! ```rust
//! use wizard_widgets::textinput::{new, EchoMode};
//!
//! let mut input = new();
//! input.set_echo_mode(EchoMode::EchoPassword);
//! input.set_value("hunter2");
//! assert_eq!(input.view(), "> *******");
//! ```

pub mod buffer;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use buffer::TextBuffer;
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use types::{EchoMode, PasteErrMsg, PasteMsg, ValidateFunc};
