//! Host browser keyboard handling.

use crate::log_debug;
use crate::tui::{AppState, Key, MainFocus, MainTransition};

impl AppState {
    pub(crate) fn handle_main_key(&mut self, key: Key) {
        match self.focus.on_key(key, self.list_at_top()) {
            MainTransition::Quit => {
                log_debug!("Quit requested");
                self.should_exit = true;
            }
            MainTransition::OpenAddHost => self.open_add_host_modal(),
            MainTransition::Moved => {}
            MainTransition::MovedAndForward => self.handle_search_key(key),
            MainTransition::Forward => match self.focus {
                MainFocus::SearchBox => self.handle_search_key(key),
                MainFocus::ResultList => self.handle_list_key(key),
            },
            MainTransition::Activate => self.select_host_to_connect(),
        }
    }

    // Search box editing.
    pub(crate) fn handle_search_key(&mut self, key: Key) {
        let changed = match key {
            Key::Char(ch) if key.is_printable() => {
                self.search.insert_char(ch);
                true
            }
            Key::Backspace => self.search.backspace(),
            Key::Delete => self.search.delete(),
            Key::Left => {
                self.search.move_left();
                false
            }
            Key::Right => {
                self.search.move_right();
                false
            }
            Key::Home => {
                self.search.move_home();
                false
            }
            Key::End => {
                self.search.move_end();
                false
            }
            _ => false,
        };

        if changed {
            self.update_filtered_hosts();
        }
    }

    pub(crate) fn handle_search_paste(&mut self, pasted: &str) {
        self.focus = MainFocus::SearchBox;
        if self.search.insert_str(pasted) {
            self.update_filtered_hosts();
        }
    }

    // Result list navigation.
    fn handle_list_key(&mut self, key: Key) {
        let row_count = self.filtered_hosts.len();
        if row_count == 0 {
            return;
        }

        let page_size = 10.max(self.host_list_area.height as usize);
        match key {
            Key::Up => self.set_selected_row(self.selected_host_row.saturating_sub(1)),
            Key::Down => self.set_selected_row(self.selected_host_row + 1),
            Key::PageUp => self.set_selected_row(self.selected_host_row.saturating_sub(page_size)),
            Key::PageDown => self.set_selected_row(self.selected_host_row + page_size),
            Key::Home => self.set_selected_row(0),
            Key::End => self.set_selected_row(row_count - 1),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/host_browser/input.rs"]
mod tests;
