//! Frame layout and shared UI helpers.

mod status_bar;
pub(crate) mod theme;

use crate::tui::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

impl AppState {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        self.render_search_bar(frame, chunks[0]);
        self.render_host_list(frame, chunks[1]);
        self.render_status_bar(frame, chunks[2]);

        if self.add_host.is_some() {
            self.render_add_host_modal(frame, frame.area());
        }
    }
}
