//! Tests for the text input.

use super::*;
use crate::action::Action;
use crate::text::Sanitizer;
use crate::Component;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn focused() -> Model {
    let mut input = new();
    input.focus();
    input
}

fn key(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn ctrl(c: char) -> KeyMsg {
    KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }
}

fn type_str(input: &mut Model, s: &str) {
    for c in s.chars() {
        input.update(Box::new(key(KeyCode::Char(c))));
    }
}

#[test]
fn test_new_default_values() {
    let input = new();
    assert_eq!(input.prompt, "> ");
    assert_eq!(input.placeholder, "");
    assert_eq!(input.echo_character, '*');
    assert_eq!(input.char_limit(), 0);
    assert_eq!(input.width(), 0);
    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
    assert!(!input.focused());
    assert_eq!(input.echo_mode, EchoMode::EchoNormal);
    assert!(input.err.is_none());
}

#[test]
fn test_set_value_with_char_limit() {
    let mut input = new();
    input.set_char_limit(5);
    input.set_value("hello world");
    assert_eq!(input.value(), "hello");
    assert_eq!(input.position(), 5);
}

#[test]
fn test_insert_over_limit_is_rejected_whole() {
    let mut input = focused();
    input.set_char_limit(3);
    input.handle(Action::Insert("ab".to_string()));
    input.handle(Action::Insert("cd".to_string()));
    assert_eq!(input.value(), "ab");
    assert_eq!(input.position(), 2);
}

#[test]
fn test_set_cursor_clamps() {
    let mut input = new();
    input.set_value("hello");
    input.set_cursor(2);
    assert_eq!(input.position(), 2);
    input.set_cursor(100);
    assert_eq!(input.position(), 5);
}

#[test]
fn test_unfocused_ignores_edits() {
    let mut input = new();
    input.handle(Action::Insert("x".to_string()));
    type_str(&mut input, "abc");
    assert_eq!(input.value(), "");

    input.set_value("programmatic");
    assert_eq!(input.value(), "programmatic");
}

#[test]
fn test_editing_actions() {
    let mut input = focused();
    input.handle(Action::Insert("hello".to_string()));
    input.handle(Action::CursorStart);
    input.handle(Action::DeleteForward);
    assert_eq!(input.value(), "ello");
    input.handle(Action::CursorEnd);
    input.handle(Action::DeleteBackward);
    assert_eq!(input.value(), "ell");
    input.handle(Action::CursorLeft);
    input.handle(Action::Insert("a".to_string()));
    assert_eq!(input.value(), "elal");
    assert_eq!(input.position(), 3);
    input.handle(Action::CursorRight);
    assert_eq!(input.position(), 4);
}

#[test]
fn test_insert_is_sanitized() {
    let mut input = focused();
    input.handle(Action::Insert("a\tb\nc\u{7}".to_string()));
    assert_eq!(input.value(), "a    b c");

    let mut input = focused();
    input.set_sanitizer(Sanitizer::new().with_tab(" "));
    input.handle(Action::Insert("a\tb".to_string()));
    assert_eq!(input.value(), "a b");
}

#[test]
fn test_update_keys() {
    let mut input = focused();
    type_str(&mut input, "hello world");
    assert_eq!(input.value(), "hello world");

    input.update(Box::new(key(KeyCode::Backspace)));
    assert_eq!(input.value(), "hello worl");

    input.update(Box::new(key(KeyCode::Home)));
    assert_eq!(input.position(), 0);
    input.update(Box::new(ctrl('e')));
    assert_eq!(input.position(), 10);

    for _ in 0..4 {
        input.update(Box::new(key(KeyCode::Left)));
    }
    input.update(Box::new(ctrl('k')));
    assert_eq!(input.value(), "hello ");
    input.update(Box::new(key(KeyCode::Left)));
    input.update(Box::new(ctrl('u')));
    assert_eq!(input.value(), " ");
    assert_eq!(input.position(), 0);
}

#[test]
fn test_control_chords_are_not_text() {
    let mut input = focused();
    input.update(Box::new(ctrl('x')));
    assert_eq!(input.value(), "");
}

#[test]
fn test_paste_messages() {
    let mut input = focused();
    input.set_char_limit(6);
    input.update(Box::new(PasteMsg("abc".to_string())));
    assert_eq!(input.value(), "abc");
    input.update(Box::new(PasteMsg("defg".to_string())));
    assert_eq!(input.value(), "abc");

    input.update(Box::new(PasteErrMsg("no clipboard".to_string())));
    assert_eq!(input.err.as_deref(), Some("no clipboard"));
}

#[test]
fn test_validation_follows_edits() {
    let mut input = focused();
    input.set_validate(Box::new(|s: &str| {
        if s.contains(' ') {
            Err("no spaces".to_string())
        } else {
            Ok(())
        }
    }));
    assert!(input.err.is_none());
    input.handle(Action::Insert("a b".to_string()));
    assert_eq!(input.err.as_deref(), Some("no spaces"));
    input.handle(Action::CursorLeft);
    input.handle(Action::DeleteBackward);
    assert_eq!(input.value(), "ab");
    assert!(input.err.is_none());
}

#[test]
fn test_view_cursor_and_blur() {
    let mut input = focused();
    input.set_value("abc");
    assert_eq!(input.view(), "> abc_");
    input.set_cursor(1);
    assert_eq!(input.view(), "> abc");
    input.blur();
    input.cursor_end();
    assert_eq!(input.view(), "> abc");
}

#[test]
fn test_view_echo_modes() {
    let mut input = focused();
    input.set_value("secret");
    input.set_echo_mode(EchoMode::EchoPassword);
    assert_eq!(input.view(), "> ******_");
    input.set_echo_mode(EchoMode::EchoNone);
    assert_eq!(input.view(), "> _");
}

#[test]
fn test_view_placeholder() {
    let mut input = new();
    input.set_placeholder("Name");
    input.set_prompt("? ");
    assert_eq!(input.view(), "? Name");
    input.focus();
    assert_eq!(input.view(), "? Name");
    input.set_value("x");
    assert_eq!(input.view(), "? x_");
}

#[test]
fn test_view_scrolls_within_width() {
    let mut input = focused();
    input.set_width(5);
    input.handle(Action::Insert("abcdefghij".to_string()));
    assert_eq!(input.view(), "> fghij_");

    input.handle(Action::CursorStart);
    assert_eq!(input.view(), "> abcde");

    for _ in 0..6 {
        input.handle(Action::CursorRight);
    }
    assert_eq!(input.position(), 6);
    assert_eq!(input.view(), "> cdefg");
}
