//! Fixed palette and text-width helpers.

use ratatui::style::{Color, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn accent() -> Color {
    Color::Cyan
}

pub(crate) fn muted() -> Color {
    Color::DarkGray
}

pub(crate) fn text() -> Color {
    Color::White
}

pub(crate) fn highlight_text() -> Color {
    Color::Black
}

pub(crate) fn label() -> Color {
    Color::Yellow
}

pub(crate) fn error() -> Color {
    Color::Red
}

pub(crate) fn success() -> Color {
    Color::Green
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(accent())
    } else {
        Style::default().fg(muted())
    }
}

pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` so it occupies at most `max_width` columns, marking the cut with `…`.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Slice a single-line input so the cursor stays visible in `width` columns.
///
/// Returns the visible text and the cursor column relative to its start.
pub(crate) fn fit_input_to_width(text: &str, before_cursor: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }

    let cursor_column = display_width(before_cursor);
    if cursor_column < width {
        let mut visible = String::new();
        let mut used = 0;
        for ch in text.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + ch_width > width {
                break;
            }
            visible.push(ch);
            used += ch_width;
        }
        return (visible, cursor_column as u16);
    }

    // Keep the tail before the cursor, leaving one column for the cursor itself.
    let mut tail: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in before_cursor.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        tail.push(ch);
        used += ch_width;
    }
    tail.reverse();
    (tail.into_iter().collect(), used as u16)
}

#[cfg(test)]
#[path = "../../test/tui/ui/theme.rs"]
mod tests;
