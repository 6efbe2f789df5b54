use super::AppState;

#[test]
fn starts_with_search_focus_and_all_hosts() {
    let app = AppState::new_for_tests(&["web01", "db01"]);
    assert_eq!(app.focus, super::MainFocus::SearchBox);
    assert_eq!(app.filtered_hosts, vec!["web01".to_string(), "db01".to_string()]);
    assert_eq!(app.selected_host(), Some("web01"));
    assert!(app.status.is_none());
}

#[test]
fn missing_config_file_loads_empty_list() {
    let app = AppState::new_for_tests(&[]);
    assert!(app.hosts.is_empty());
    assert!(app.list_at_top());
    assert_eq!(app.selected_host(), None);
}

#[test]
fn selection_is_clamped_to_filtered_rows() {
    let mut app = AppState::new_for_tests(&["a", "b", "c"]);
    app.set_selected_row(10);
    assert_eq!(app.selected_host(), Some("c"));
    assert!(!app.list_at_top());
}

#[test]
fn scroll_keeps_selection_visible() {
    let hosts: Vec<String> = (0..20).map(|idx| format!("host{idx}")).collect();
    let refs: Vec<&str> = hosts.iter().map(String::as_str).collect();
    let mut app = AppState::new_for_tests(&refs);

    app.set_selected_row(12);
    app.update_host_scroll(5);
    assert_eq!(app.host_scroll_offset, 8);

    app.set_selected_row(3);
    app.update_host_scroll(5);
    assert_eq!(app.host_scroll_offset, 3);
}

#[test]
fn activating_records_host_and_exits() {
    let mut app = AppState::new_for_tests(&["alpha", "beta"]);
    app.set_selected_row(1);
    app.select_host_to_connect();
    assert_eq!(app.selected_host_to_connect.as_deref(), Some("beta"));
    assert!(app.should_exit);
}

#[test]
fn activating_empty_list_does_nothing() {
    let mut app = AppState::new_for_tests(&[]);
    app.select_host_to_connect();
    assert!(app.selected_host_to_connect.is_none());
    assert!(!app.should_exit);
}
