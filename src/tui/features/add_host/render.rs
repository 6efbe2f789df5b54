//! Add-host modal rendering.

use crate::tui::ui::theme;
use crate::tui::{AppState, FormField};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const MODAL_WIDTH: u16 = 56;
const LABEL_WIDTH: u16 = 8;

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

impl AppState {
    pub(crate) fn render_add_host_modal(&mut self, frame: &mut Frame, area: Rect) {
        let Some(form) = self.add_host.as_mut() else {
            return;
        };

        // Three fields, a spacer, the button, the error line, and the hint line.
        let popup = centered_rect(MODAL_WIDTH, 9, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(true))
            .title(" Add Host ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        form.field_areas.clear();
        if inner.height == 0 || inner.width <= LABEL_WIDTH {
            return;
        }

        let mut cursor = None;
        for (idx, field) in FormField::ALL.iter().copied().filter(|field| field.is_text()).enumerate() {
            let row = inner.y + idx as u16;
            if row >= inner.bottom() {
                break;
            }
            let focused = form.focused == field;
            let label_style = if focused {
                Style::default().fg(theme::accent()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::label())
            };
            frame.render_widget(
                Paragraph::new(Span::styled(format!("{}:", field.label()), label_style)),
                Rect::new(inner.x, row, LABEL_WIDTH, 1),
            );

            let value_area = Rect::new(inner.x + LABEL_WIDTH, row, inner.width - LABEL_WIDTH, 1);
            form.field_areas.push((field, Rect::new(inner.x, row, inner.width, 1)));
            let Some(value) = form.field(field) else {
                continue;
            };
            let (visible, cursor_offset) = theme::fit_input_to_width(value.as_str(), value.before_cursor(), value_area.width as usize);
            let value_style = if focused {
                Style::default().fg(theme::text()).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme::text())
            };
            let padded = format!("{:<width$}", visible, width = value_area.width as usize);
            frame.render_widget(Paragraph::new(Span::styled(padded, value_style)), value_area);
            if focused {
                cursor = Some(Position::new(value_area.x.saturating_add(cursor_offset), row));
            }
        }

        let button_row = inner.y + 4;
        if button_row < inner.bottom() {
            let label = format!("[ {} ]", FormField::Save.label());
            let button_width = (theme::display_width(&label) as u16).min(inner.width);
            let button_area = Rect::new(inner.x + (inner.width - button_width) / 2, button_row, button_width, 1);
            let button_style = if form.focused == FormField::Save {
                Style::default().bg(theme::accent()).fg(theme::highlight_text()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::accent())
            };
            frame.render_widget(Paragraph::new(Span::styled(label, button_style)), button_area);
            form.field_areas.push((FormField::Save, button_area));
        }

        let error_row = inner.y + 5;
        if let Some(error) = &form.error
            && error_row < inner.bottom()
        {
            let message = theme::truncate_to_display_width(error, inner.width as usize);
            frame.render_widget(
                Paragraph::new(Span::styled(message, Style::default().fg(theme::error()))),
                Rect::new(inner.x, error_row, inner.width, 1),
            );
        }

        let hint_row = inner.y + 6;
        if hint_row < inner.bottom() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("Enter", Style::default().fg(theme::accent())),
                    Span::styled(" next/save  ", Style::default().fg(theme::muted())),
                    Span::styled("Esc", Style::default().fg(theme::accent())),
                    Span::styled(" cancel", Style::default().fg(theme::muted())),
                ])),
                Rect::new(inner.x, hint_row, inner.width, 1),
            );
        }

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}
