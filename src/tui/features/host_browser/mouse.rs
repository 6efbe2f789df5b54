//! Host browser mouse handling.

use crate::tui::{AppState, MainFocus};

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x.saturating_add(area.width) && row >= area.y && row < area.y.saturating_add(area.height)
}

impl AppState {
    pub(crate) fn handle_main_click(&mut self, column: u16, row: u16) {
        if contains(self.add_button_area, column, row) {
            self.open_add_host_modal();
            return;
        }

        if contains(self.search_area, column, row) {
            self.focus = MainFocus::SearchBox;
            return;
        }

        if let Some(clicked_row) = self.host_row_at(column, row) {
            let already_selected = self.focus == MainFocus::ResultList && clicked_row == self.selected_host_row;
            self.focus = MainFocus::ResultList;
            self.set_selected_row(clicked_row);
            if already_selected {
                self.select_host_to_connect();
            }
        }
    }

    pub(crate) fn handle_main_scroll(&mut self, down: bool) {
        if self.filtered_hosts.is_empty() {
            return;
        }
        if down {
            self.set_selected_row(self.selected_host_row + 1);
        } else {
            self.set_selected_row(self.selected_host_row.saturating_sub(1));
        }
    }

    fn host_row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !contains(self.host_list_area, column, row) {
            return None;
        }
        let index = self.host_scroll_offset + (row - self.host_list_area.y) as usize;
        (index < self.filtered_hosts.len()).then_some(index)
    }
}
