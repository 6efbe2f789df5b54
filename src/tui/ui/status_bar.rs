//! Bottom status bar: key hints on the left, last message on the right.

use crate::tui::ui::theme::{self, display_width};
use crate::tui::{AppState, FocusTarget};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

fn key_hints(target: FocusTarget) -> &'static [(&'static str, &'static str)] {
    match target {
        FocusTarget::SearchBox => &[("↓", "hosts"), ("Ctrl+N", "add host"), ("Esc", "quit")],
        FocusTarget::ResultList => &[("Enter", "connect"), ("↑", "search"), ("Ctrl+N", "add host"), ("Esc/q", "quit")],
        FocusTarget::AddHostNameField | FocusTarget::AddHostAddressField | FocusTarget::AddHostUserField => {
            &[("↑/↓", "field"), ("Enter", "next"), ("Esc", "cancel")]
        }
        FocusTarget::AddHostSaveButton => &[("↑/↓", "field"), ("Enter", "save"), ("Esc", "cancel")],
    }
}

impl AppState {
    pub(crate) fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut left_spans = Vec::new();
        for (idx, (key, action)) in key_hints(self.focus_target()).iter().enumerate() {
            if idx > 0 {
                left_spans.push(Span::styled(" │ ", Style::default().fg(theme::muted())));
            }
            left_spans.push(Span::styled(*key, Style::default().fg(theme::accent())));
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled(*action, Style::default().fg(theme::text())));
        }

        let Some(status) = &self.status else {
            frame.render_widget(Paragraph::new(Line::from(left_spans)), area);
            return;
        };

        let color = if status.is_error { theme::error() } else { theme::success() };
        let right_width = display_width(&status.text).min(area.width as usize / 2) as u16;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(right_width)])
            .split(area);

        let right_text = theme::truncate_to_display_width(&status.text, right_width as usize);
        frame.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(right_text, Style::default().fg(color))).alignment(Alignment::Right),
            chunks[1],
        );
    }
}
