use super::{display_width, fit_input_to_width, truncate_to_display_width};

#[test]
fn measures_wide_characters() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn truncates_with_ellipsis() {
    assert_eq!(truncate_to_display_width("short", 10), "short");
    assert_eq!(truncate_to_display_width("production-db", 6), "produ…");
    assert_eq!(truncate_to_display_width("日本語", 4), "日…");
    assert_eq!(truncate_to_display_width("anything", 0), "");
}

#[test]
fn fits_short_input_unchanged() {
    let (visible, cursor) = fit_input_to_width("web", "we", 10);
    assert_eq!(visible, "web");
    assert_eq!(cursor, 2);
}

#[test]
fn scrolls_long_input_to_keep_cursor_visible() {
    let text = "abcdefghij";
    let (visible, cursor) = fit_input_to_width(text, text, 5);
    assert_eq!(visible, "ghij");
    assert_eq!(cursor, 4);
}

#[test]
fn zero_width_shows_nothing() {
    assert_eq!(fit_input_to_width("abc", "a", 0), (String::new(), 0));
}
