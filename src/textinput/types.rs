//! Core types for the text input.

use bubbletea_rs::Msg;

/// Clipboard contents delivered by [`super::paste`].
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// How typed text is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Text is shown as typed.
    #[default]
    EchoNormal,
    /// Every character is shown as the echo character.
    EchoPassword,
    /// Nothing is shown.
    EchoNone,
}

/// Returns an error message when the value is invalid.
pub type ValidateFunc = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
