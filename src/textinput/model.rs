//! Core model for the text input.

use super::buffer::TextBuffer;
use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{EchoMode, PasteErrMsg, ValidateFunc};
use crate::style::SharedStyle;
use crate::text::Sanitizer;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::time::Duration;

/// A single-line text input.
///
/// ```rust
/// use wizard_widgets::textinput::{new, EchoMode};
/// use wizard_widgets::{Action, Component};
///
/// let mut input = new();
/// input.focus();
/// input.set_char_limit(8);
/// input.set_validate(Box::new(|s: &str| {
///     if s.len() >= 3 {
///         Ok(())
///     } else {
///         Err("too short".to_string())
///     }
/// }));
///
/// input.handle(Action::Insert("ab".to_string()));
/// assert_eq!(input.err.as_deref(), Some("too short"));
/// input.handle(Action::Insert("c".to_string()));
/// assert!(input.err.is_none());
///
/// input.set_echo_mode(EchoMode::EchoPassword);
/// assert_eq!(input.view(), "> ***_");
/// ```
pub struct Model {
    /// Message from the last validation or paste failure.
    pub err: Option<String>,
    /// Text shown before the input.
    pub prompt: String,
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// How typed text is displayed.
    pub echo_mode: EchoMode,
    /// Mask character for [`EchoMode::EchoPassword`].
    pub echo_character: char,
    /// Editing key bindings.
    pub key_map: KeyMap,
    pub(super) buffer: TextBuffer,
    pub(super) focus: bool,
    pub(super) width: usize,
    pub(super) offset: usize,
    pub(super) offset_right: usize,
    pub(super) validate: Option<ValidateFunc>,
    pub(super) sanitizer: Sanitizer,
    pub(super) styles: Option<SharedStyle>,
}

/// Creates an unfocused, empty input with the `"> "` prompt.
pub fn new() -> Model {
    Model {
        err: None,
        prompt: "> ".to_string(),
        placeholder: String::new(),
        echo_mode: EchoMode::EchoNormal,
        echo_character: '*',
        key_map: default_key_map(),
        buffer: TextBuffer::new(),
        focus: false,
        width: 0,
        offset: 0,
        offset_right: 0,
        validate: None,
        sanitizer: Sanitizer::default(),
        styles: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Command that reads the system clipboard and delivers a
/// [`PasteMsg`](super::PasteMsg) or [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
