use super::{HOST_LINE_REGEX, host_alias_from_line, parse_host_aliases};
use std::io::{self, Cursor};

fn aliases(contents: &str) -> Vec<String> {
    parse_host_aliases(Cursor::new(contents)).expect("parse in-memory config")
}

#[test]
fn excludes_wildcard_hosts_and_keeps_file_order() {
    let parsed = aliases("Host alpha\n    HostName 10.0.0.1\nHost beta*\nHost gamma\n");
    assert_eq!(parsed, vec!["alpha", "gamma"]);
}

#[test]
fn question_mark_patterns_are_not_destinations() {
    let parsed = aliases("Host web-?\nHost db\nHost *\nHost ?x*\n");
    assert_eq!(parsed, vec!["db"]);
}

#[test]
fn option_lines_and_comments_are_ignored() {
    let parsed = aliases("# Host commented\nHostName 10.0.0.9\nUser root\n\nMatch host foo\nhost lowercase\n");
    assert!(parsed.is_empty());
}

#[test]
fn surrounding_whitespace_is_trimmed_before_matching() {
    assert_eq!(host_alias_from_line("   Host  indented   "), Some("indented"));
    assert_eq!(host_alias_from_line("\tHost\ttabbed"), Some("tabbed"));
    assert_eq!(host_alias_from_line("Host"), None);
    assert_eq!(host_alias_from_line("Host   "), None);
    assert_eq!(host_alias_from_line("HostName example.com"), None);
}

#[test]
fn remainder_after_first_whitespace_run_is_one_alias() {
    assert_eq!(host_alias_from_line("Host app-a app-b"), Some("app-a app-b"));
}

#[test]
fn empty_input_has_no_aliases() {
    assert!(aliases("").is_empty());
    assert!(aliases("User nobody\n    Port 22\n").is_empty());
}

#[test]
fn duplicate_aliases_are_kept_in_order() {
    let parsed = aliases("Host a\nHost b\nHost a\n");
    assert_eq!(parsed, vec!["a", "b", "a"]);
}

#[test]
fn host_line_pattern_is_available() {
    assert!(HOST_LINE_REGEX.is_some());
}

#[test]
fn invalid_utf8_line_does_not_hide_other_hosts() {
    let bytes: &[u8] = b"Host alpha\n# caf\xe9 comment\nHost gamma\n";
    let parsed = parse_host_aliases(Cursor::new(bytes)).expect("lossy decode");
    assert_eq!(parsed, vec!["alpha", "gamma"]);
}

#[test]
fn crlf_line_endings_are_trimmed() {
    assert_eq!(aliases("Host alpha\r\nHost beta\r\n"), vec!["alpha", "beta"]);
}

#[test]
fn read_failures_still_propagate() {
    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    let err = parse_host_aliases(io::BufReader::new(FailingReader)).expect_err("read error surfaces");
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
}
