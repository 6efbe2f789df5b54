use super::key_from_event;
use crate::tui::{AppState, Key, MainFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn maps_plain_and_named_keys() {
    assert_eq!(key_from_event(&press(KeyCode::Char('a'), KeyModifiers::NONE)), Some(Key::Char('a')));
    assert_eq!(key_from_event(&press(KeyCode::Char('A'), KeyModifiers::SHIFT)), Some(Key::Char('A')));
    assert_eq!(key_from_event(&press(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Escape));
    assert_eq!(key_from_event(&press(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
    assert_eq!(key_from_event(&press(KeyCode::F(5), KeyModifiers::NONE)), Some(Key::Other));
}

#[test]
fn maps_ctrl_n_and_hides_other_chords() {
    assert_eq!(key_from_event(&press(KeyCode::Char('n'), KeyModifiers::CONTROL)), Some(Key::CtrlN));
    assert_eq!(key_from_event(&press(KeyCode::Char('q'), KeyModifiers::CONTROL)), Some(Key::Other));
    assert_eq!(key_from_event(&press(KeyCode::Char('x'), KeyModifiers::ALT)), Some(Key::Other));
}

#[test]
fn drops_key_releases() {
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(key_from_event(&release), None);
}

#[test]
fn keys_route_to_modal_while_open() {
    let mut app = AppState::new_for_tests(&["alpha"]);
    app.handle_key(press(KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert!(app.add_host.is_some());

    app.handle_key(press(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(!app.should_exit);
    assert_eq!(app.add_host.as_ref().map(|form| form.name.as_str()), Some("q"));
    assert!(app.search.is_empty());

    app.handle_key(press(KeyCode::Esc, KeyModifiers::NONE));
    assert!(app.add_host.is_none());
    assert!(!app.should_exit);

    app.handle_key(press(KeyCode::Esc, KeyModifiers::NONE));
    assert!(app.should_exit);
}

#[test]
fn paste_routes_to_search_when_modal_closed() {
    let mut app = AppState::new_for_tests(&["alpha", "beta"]);
    app.focus = MainFocus::ResultList;
    app.handle_paste("bet");
    assert_eq!(app.focus, MainFocus::SearchBox);
    assert_eq!(app.filtered_hosts, vec!["beta".to_string()]);
}
