use super::*;
use crate::action::Action;
use crate::filter::MatchMode;
use crate::item::{items_from, Item};
use crate::Component;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn fruit(height: usize) -> Model<String> {
    let mut list = Model::new(items_from(&["Apple", "Banana", "Cherry"]), height);
    list.focus();
    list
}

fn key(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn titles<T>(list: &Model<T>) -> Vec<&str> {
    list.visible_items().iter().map(|i| i.title()).collect()
}

#[test]
fn test_filter_then_clear_scenario() {
    let mut list = fruit(2);

    list.handle(Action::FilterChar('a'));
    list.handle(Action::FilterChar('n'));
    assert_eq!(titles(&list), vec!["Banana"]);
    assert_eq!(list.cursor(), 0);

    list.handle(Action::FilterBackspace);
    list.handle(Action::FilterBackspace);
    assert_eq!(titles(&list), vec!["Apple", "Banana", "Cherry"]);
    assert_eq!((list.cursor(), list.offset()), (0, 0));

    list.handle(Action::MoveDown);
    list.handle(Action::MoveDown);
    assert_eq!((list.cursor(), list.offset()), (2, 1));
}

#[test]
fn test_unfocused_ignores_actions() {
    let mut list = Model::new(items_from(&["a", "b"]), 5);
    list.handle(Action::MoveDown);
    list.handle(Action::FilterChar('b'));
    assert_eq!(list.cursor(), 0);
    assert_eq!(list.filter_query(), "");

    // Programmatic setters still apply.
    list.set_filter("b");
    assert_eq!(titles(&list), vec!["b"]);
}

#[test]
fn test_filter_change_resets_cursor() {
    let mut list = Model::new(items_from(&["ab", "abc", "abcd", "x"]), 2);
    list.focus();
    list.handle(Action::End);
    assert_eq!((list.cursor(), list.offset()), (3, 2));

    list.handle(Action::FilterChar('a'));
    assert_eq!((list.cursor(), list.offset()), (0, 0));
    list.handle(Action::End);
    assert_eq!(list.selected_item().map(|i| i.title()), Some("abcd"));

    list.handle(Action::FilterClear);
    list.handle(Action::FilterClear);
    assert_eq!(list.filter_query(), "");
    assert_eq!(list.len(), 4);
}

#[test]
fn test_selected_item_reports_sequence_identity() {
    let mut list = fruit(3);
    list.handle(Action::FilterChar('e'));
    assert_eq!(titles(&list), vec!["Apple", "Cherry"]);
    list.handle(Action::MoveDown);
    assert_eq!(list.selected_index(), Some(2));
}

#[test]
fn test_empty_view_has_no_selection() {
    let mut list = fruit(3);
    list.set_filter("zzz");
    assert!(list.is_empty());
    assert!(list.selected_item().is_none());
    list.handle(Action::MoveDown);
    list.handle(Action::End);
    assert_eq!(list.cursor(), 0);
}

#[test]
fn test_set_items_keeps_query_and_clamps() {
    let mut list = Model::new(items_from(&["a1", "a2", "a3", "b"]), 10);
    list.focus();
    list.set_filter("a");
    list.handle(Action::End);
    assert_eq!(list.cursor(), 2);

    list.set_items(items_from(&["a1", "b", "a2"]));
    assert_eq!(list.filter_query(), "a");
    assert_eq!(titles(&list), vec!["a1", "a2"]);
    assert_eq!(list.cursor(), 1);
}

#[test]
fn test_set_selected_clamps() {
    let mut list = fruit(2);
    list.set_selected(10);
    assert_eq!((list.cursor(), list.offset()), (2, 1));
}

#[test]
fn test_fuzzy_mode() {
    let mut list = Model::new(items_from(&["Banana", "Blueberry"]), 5)
        .with_match_mode(MatchMode::Fuzzy);
    list.set_filter("bry");
    assert_eq!(titles(&list), vec!["Blueberry"]);
}

#[test]
fn test_update_resolves_keys() {
    let mut list = fruit(3);
    list.update(Box::new(key(KeyCode::Down)));
    assert_eq!(list.cursor(), 1);

    list.update(Box::new(key(KeyCode::Char('c'))));
    assert_eq!(list.filter_query(), "c");
    assert_eq!(titles(&list), vec!["Cherry"]);

    list.update(Box::new(key(KeyCode::Backspace)));
    assert_eq!(list.filter_query(), "");

    list.update(Box::new(key(KeyCode::Char('x'))));
    list.update(Box::new(key(KeyCode::Esc)));
    assert_eq!(list.filter_query(), "");
    assert_eq!(list.len(), 3);
}

#[test]
fn test_snapshot_window_and_indicator() {
    let mut list = fruit(2);
    list.handle(Action::End);
    let snap = list.snapshot();
    let rows: Vec<(usize, &str, bool)> = snap
        .rows
        .iter()
        .map(|r| (r.index, r.title.as_str(), r.is_cursor))
        .collect();
    assert_eq!(rows, vec![(1, "Banana", false), (2, "Cherry", true)]);
    let scroll = snap.scroll.expect("scrollable");
    assert_eq!((scroll.total, scroll.start, scroll.end), (3, 1, 3));
    assert_eq!(snap.query, None);
}

#[test]
fn test_view_plain() {
    let mut list = fruit(2).with_title("Fruit");
    list.handle(Action::MoveDown);
    assert_eq!(list.view(), "Fruit\n  Apple\n> Banana\n1-2 of 3");
}

#[test]
fn test_view_empty_state() {
    let mut list = fruit(2);
    list.set_filter("zzz");
    assert_eq!(list.view(), "Filter: zzz\nNo items.");
}

#[test]
fn test_view_disabled_and_description() {
    let items = vec![
        Item::new(1, "pg").with_description("PostgreSQL"),
        Item::new(2, "my").disabled(true),
    ];
    let mut list = Model::new(items, 5);
    list.focus();
    assert_eq!(list.view(), "> pg - PostgreSQL\n  my");
}

#[test]
fn test_view_with_help_line() {
    let list = fruit(3).with_help(true);
    let view = list.view();
    let last = view.lines().last().unwrap_or_default();
    assert_eq!(last, "↑ up • ↓ down • esc clear filter");
}

#[test]
fn test_view_does_not_mutate() {
    let mut list = fruit(2);
    list.handle(Action::MoveDown);
    let before = list.snapshot();
    let _ = list.view();
    let _ = list.view();
    assert_eq!(list.snapshot(), before);
}

#[test]
fn test_view_zero_height_keeps_item_count() {
    let list = fruit(0);
    assert_eq!(list.len(), 3);
    assert!(list.snapshot().rows.is_empty());
    assert_eq!(list.snapshot().total, 3);
    assert_eq!(list.view(), "0 of 3");
}

#[test]
fn test_view_unfocused_still_marks_cursor() {
    let mut list = fruit(2);
    list.handle(Action::End);
    list.blur();
    assert_eq!(list.view(), "  Banana\n> Cherry\n2-3 of 3");
}
