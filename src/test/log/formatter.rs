use super::LogFormatter;
use crate::log::LogLevel;

#[test]
fn formats_level_tag_without_timestamp() {
    let formatter = LogFormatter::new(false, true);
    assert_eq!(formatter.format(Some(LogLevel::Warning), "config missing"), "[WARN] config missing");
    assert_eq!(formatter.format(None, "plain"), "plain");
}

#[test]
fn omits_level_when_disabled() {
    let formatter = LogFormatter::new(false, false);
    assert_eq!(formatter.format(Some(LogLevel::Error), "boom"), "boom");
}

#[test]
fn timestamp_prefix_precedes_level() {
    let formatter = LogFormatter::default();
    let line = formatter.format(Some(LogLevel::Info), "loaded 3 hosts");
    assert!(line.ends_with("[INFO] loaded 3 hosts"));
    // "YYYY-MM-DD HH:MM:SS.mmm "
    assert_eq!(line.find(" [INFO]"), Some(23));
}
