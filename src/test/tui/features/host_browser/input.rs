use super::{AppState, Key, MainFocus};

fn type_text(app: &mut AppState, text: &str) {
    for ch in text.chars() {
        app.handle_main_key(Key::Char(ch));
    }
}

#[test]
fn typing_filters_and_resets_selection() {
    let mut app = AppState::new_for_tests(&["alpha", "beta", "gamma"]);
    app.focus = MainFocus::ResultList;
    app.set_selected_row(2);

    app.focus = MainFocus::SearchBox;
    type_text(&mut app, "ga");
    assert_eq!(app.search.as_str(), "ga");
    assert_eq!(app.filtered_hosts, vec!["gamma".to_string()]);
    assert_eq!(app.selected_host_row, 0);
}

#[test]
fn arrows_walk_between_search_and_list() {
    let mut app = AppState::new_for_tests(&["alpha", "beta"]);

    app.handle_main_key(Key::Down);
    assert_eq!(app.focus, MainFocus::ResultList);
    assert_eq!(app.selected_host(), Some("alpha"));

    app.handle_main_key(Key::Down);
    assert_eq!(app.selected_host(), Some("beta"));

    app.handle_main_key(Key::Up);
    assert_eq!(app.focus, MainFocus::ResultList);
    assert_eq!(app.selected_host(), Some("alpha"));

    app.handle_main_key(Key::Up);
    assert_eq!(app.focus, MainFocus::SearchBox);
}

#[test]
fn typing_in_list_returns_to_search_with_the_character() {
    let mut app = AppState::new_for_tests(&["alpha", "beta"]);
    app.handle_main_key(Key::Down);

    app.handle_main_key(Key::Char('b'));
    assert_eq!(app.focus, MainFocus::SearchBox);
    assert_eq!(app.search.as_str(), "b");
    assert_eq!(app.filtered_hosts, vec!["beta".to_string()]);

    app.handle_main_key(Key::Down);
    app.handle_main_key(Key::Backspace);
    assert_eq!(app.focus, MainFocus::SearchBox);
    assert!(app.search.is_empty());
}

#[test]
fn enter_on_list_connects_to_selected_host() {
    let mut app = AppState::new_for_tests(&["alpha", "beta", "gamma"]);
    type_text(&mut app, "ta");
    app.handle_main_key(Key::Down);
    app.handle_main_key(Key::Enter);

    assert_eq!(app.selected_host_to_connect.as_deref(), Some("beta"));
    assert!(app.should_exit);
}

#[test]
fn enter_in_search_box_does_not_connect() {
    let mut app = AppState::new_for_tests(&["alpha"]);
    app.handle_main_key(Key::Enter);
    assert!(app.selected_host_to_connect.is_none());
    assert!(!app.should_exit);
}

#[test]
fn escape_quits_without_selection() {
    for focus in [MainFocus::SearchBox, MainFocus::ResultList] {
        let mut app = AppState::new_for_tests(&["alpha"]);
        app.focus = focus;
        app.handle_main_key(Key::Escape);
        assert!(app.should_exit);
        assert!(app.selected_host_to_connect.is_none());
    }
}

#[test]
fn q_in_search_box_filters_instead_of_quitting() {
    let mut app = AppState::new_for_tests(&["qa-server", "alpha"]);
    app.handle_main_key(Key::Char('q'));

    assert!(!app.should_exit);
    assert_eq!(app.search.as_str(), "q");
    assert_eq!(app.filtered_hosts, vec!["qa-server".to_string()]);
}

#[test]
fn q_in_result_list_quits() {
    let mut app = AppState::new_for_tests(&["qa-server", "alpha"]);
    app.handle_main_key(Key::Down);
    app.handle_main_key(Key::Char('q'));

    assert!(app.should_exit);
    assert!(app.search.is_empty());
    assert!(app.selected_host_to_connect.is_none());
}

#[test]
fn ctrl_n_opens_add_host_modal() {
    let mut app = AppState::new_for_tests(&["alpha"]);
    app.handle_main_key(Key::CtrlN);
    assert!(app.add_host.is_some());
}

#[test]
fn paste_goes_to_search_box() {
    let mut app = AppState::new_for_tests(&["prod-web", "stage-web"]);
    app.handle_main_key(Key::Down);
    app.handle_search_paste("stage\n");
    assert_eq!(app.focus, MainFocus::SearchBox);
    assert_eq!(app.search.as_str(), "stage");
    assert_eq!(app.filtered_hosts, vec!["stage-web".to_string()]);
}

#[test]
fn list_keys_on_empty_results_are_ignored() {
    let mut app = AppState::new_for_tests(&["alpha"]);
    type_text(&mut app, "zz");
    app.handle_main_key(Key::Down);
    app.handle_main_key(Key::End);
    app.handle_main_key(Key::Enter);
    assert!(app.selected_host_to_connect.is_none());
}
