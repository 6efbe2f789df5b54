//! Host browser rendering.

use crate::tui::ui::theme;
use crate::tui::{AppState, MainFocus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

const ADD_BUTTON_LABEL: &str = "[ Add Host ]";
const SEARCH_PLACEHOLDER: &str = "Search hosts...";

impl AppState {
    // Search row: input box plus the add-host button.
    pub(crate) fn render_search_bar(&mut self, frame: &mut Frame, area: Rect) {
        let button_width = (theme::display_width(ADD_BUTTON_LABEL) as u16).saturating_add(4);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(button_width)])
            .split(area);

        self.search_area = chunks[0];
        self.add_button_area = chunks[1];

        let modal_open = self.add_host.is_some();
        let focused = !modal_open && self.focus == MainFocus::SearchBox;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(focused))
            .title(" Search ");
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let cursor_offset = if self.search.is_empty() {
            frame.render_widget(Paragraph::new(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme::muted()))), inner);
            0
        } else {
            let (visible, cursor_offset) = theme::fit_input_to_width(self.search.as_str(), self.search.before_cursor(), inner.width as usize);
            frame.render_widget(Paragraph::new(Span::styled(visible, Style::default().fg(theme::text()))), inner);
            cursor_offset
        };
        if focused && inner.width > 0 {
            frame.set_cursor_position(Position::new(inner.x.saturating_add(cursor_offset), inner.y));
        }

        let button_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(false));
        let button_inner = button_block.inner(chunks[1]);
        frame.render_widget(button_block, chunks[1]);
        frame.render_widget(
            Paragraph::new(Span::styled(ADD_BUTTON_LABEL, Style::default().fg(theme::accent()).add_modifier(Modifier::BOLD))),
            button_inner,
        );
    }

    // Host list panel.
    pub(crate) fn render_host_list(&mut self, frame: &mut Frame, area: Rect) {
        let modal_open = self.add_host.is_some();
        let focused = !modal_open && self.focus == MainFocus::ResultList;

        let total_hosts = self.hosts.len();
        let title = if self.search.is_empty() {
            format!(" Hosts - {} ", total_hosts)
        } else {
            format!(" Hosts - {}/{} ", self.filtered_hosts.len(), total_hosts)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(focused))
            .title(title);
        let list_area = block.inner(area);
        frame.render_widget(block, area);

        self.host_list_area = list_area;
        if list_area.height == 0 || list_area.width == 0 {
            return;
        }

        if self.filtered_hosts.is_empty() {
            let message = if self.hosts.is_empty() {
                "No hosts in SSH config. Press Ctrl+N to add one."
            } else {
                "No hosts match the search."
            };
            frame.render_widget(Paragraph::new(Line::from(Span::styled(message, Style::default().fg(theme::muted())))), list_area);
            return;
        }

        let viewport_height = list_area.height as usize;
        self.update_host_scroll(viewport_height);

        let max_width = list_area.width.saturating_sub(2) as usize;
        let visible_hosts: Vec<ListItem> = self
            .filtered_hosts
            .iter()
            .skip(self.host_scroll_offset)
            .take(viewport_height)
            .map(|host| {
                ListItem::new(Line::from(Span::styled(
                    theme::truncate_to_display_width(host, max_width),
                    Style::default().fg(theme::text()),
                )))
            })
            .collect();

        let highlight_style = if focused {
            Style::default().bg(theme::accent()).fg(theme::highlight_text()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(theme::muted()).add_modifier(Modifier::BOLD)
        };
        let list = List::new(visible_hosts).highlight_style(highlight_style).highlight_symbol("> ");

        let mut adjusted_state = ListState::default();
        adjusted_state.select(Some(self.selected_host_row.saturating_sub(self.host_scroll_offset)));
        frame.render_stateful_widget(list, list_area, &mut adjusted_state);
    }
}
