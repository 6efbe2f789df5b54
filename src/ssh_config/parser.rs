//! `Host` line scanner.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead};

static HOST_LINE_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^Host\s+(.+)").ok());

/// Extract the alias declared on a single config line.
///
/// Returns `None` for option lines, comments, blank lines and wildcard
/// patterns (`*` / `?`), which are matching rules rather than destinations.
pub fn host_alias_from_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let alias = HOST_LINE_REGEX.as_ref()?.captures(trimmed)?.get(1)?.as_str();

    if alias.contains('*') || alias.contains('?') {
        return None;
    }

    Some(alias)
}

/// Scan a config stream and collect aliases in order of appearance.
///
/// Lines are decoded lossily, so stray non-UTF-8 bytes only affect the line
/// they sit on. Read failures are still returned.
pub fn parse_host_aliases<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut aliases = Vec::new();
    let mut raw_line = Vec::new();

    loop {
        raw_line.clear();
        if reader.read_until(b'\n', &mut raw_line)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&raw_line);
        if let Some(alias) = host_alias_from_line(&line) {
            aliases.push(alias.to_string());
        }
    }

    Ok(aliases)
}

#[cfg(test)]
#[path = "../test/ssh_config/parser.rs"]
mod tests;
