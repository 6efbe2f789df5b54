//! Core TUI state and initialization.

use super::add_host_state::AddHostState;
use super::focus::{FocusTarget, MainFocus};
use super::text_field::TextField;
use crate::ssh_config::ConfigStore;
use crate::tui::features::host_browser::filter_hosts;
use crate::{log_debug, log_error};
use ratatui::layout::Rect;

/// One-line message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) is_error: bool,
}

impl StatusMessage {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state.
pub(crate) struct AppState {
    pub(crate) store: ConfigStore,
    /// Aliases from the last load; reloaded only on explicit refresh.
    pub(crate) hosts: Vec<String>,
    pub(crate) filtered_hosts: Vec<String>,
    pub(crate) selected_host_row: usize,
    pub(crate) host_scroll_offset: usize,
    pub(crate) search: TextField,
    pub(crate) focus: MainFocus,
    pub(crate) add_host: Option<AddHostState>,
    pub(crate) status: Option<StatusMessage>,
    pub(crate) should_exit: bool,
    pub(crate) selected_host_to_connect: Option<String>,
    pub(crate) search_area: Rect,
    pub(crate) add_button_area: Rect,
    pub(crate) host_list_area: Rect,
}

impl AppState {
    /// Create the state and load hosts from `store`.
    pub(crate) fn new(store: ConfigStore) -> Self {
        log_debug!("Initializing host picker for {}", store.path().display());

        let mut app = Self {
            store,
            hosts: Vec::new(),
            filtered_hosts: Vec::new(),
            selected_host_row: 0,
            host_scroll_offset: 0,
            search: TextField::default(),
            focus: MainFocus::SearchBox,
            add_host: None,
            status: None,
            should_exit: false,
            selected_host_to_connect: None,
            search_area: Rect::default(),
            add_button_area: Rect::default(),
            host_list_area: Rect::default(),
        };

        app.refresh_hosts();
        app
    }

    #[cfg(test)]
    pub(crate) fn new_for_tests(hosts: &[&str]) -> Self {
        let store = ConfigStore::new(std::env::temp_dir().join("hostpick-tests-unused").join("config"));
        let mut app = Self::new(store);
        app.hosts = hosts.iter().map(|host| host.to_string()).collect();
        app.update_filtered_hosts();
        app
    }

    /// Reload aliases from disk and re-apply the current query.
    pub(crate) fn refresh_hosts(&mut self) {
        match self.store.load() {
            Ok(hosts) => {
                log_debug!("Loaded {} SSH hosts", hosts.len());
                self.hosts = hosts;
            }
            Err(err) => {
                log_error!("Failed to load SSH hosts: {}", err);
                self.status = Some(StatusMessage::error(format!("Failed to read {}: {}", self.store.path().display(), err)));
                self.hosts.clear();
            }
        }
        self.update_filtered_hosts();
    }

    /// Rebuild the visible rows from the cached aliases.
    pub(crate) fn update_filtered_hosts(&mut self) {
        self.filtered_hosts = filter_hosts(&self.hosts, self.search.as_str());
        self.selected_host_row = 0;
        self.host_scroll_offset = 0;
    }

    pub(crate) fn list_at_top(&self) -> bool {
        self.filtered_hosts.is_empty() || self.selected_host_row == 0
    }

    pub(crate) fn selected_host(&self) -> Option<&str> {
        self.filtered_hosts.get(self.selected_host_row).map(String::as_str)
    }

    pub(crate) fn focus_target(&self) -> FocusTarget {
        match &self.add_host {
            Some(form) => form.focused.into(),
            None => self.focus.into(),
        }
    }

    pub(crate) fn set_selected_row(&mut self, row: usize) {
        if self.filtered_hosts.is_empty() {
            self.selected_host_row = 0;
            return;
        }
        self.selected_host_row = row.min(self.filtered_hosts.len() - 1);
    }

    /// Keep the selected row inside a viewport of `viewport_height` rows.
    pub(crate) fn update_host_scroll(&mut self, viewport_height: usize) {
        let viewport_height = viewport_height.max(1);
        if self.selected_host_row < self.host_scroll_offset {
            self.host_scroll_offset = self.selected_host_row;
        } else if self.selected_host_row >= self.host_scroll_offset + viewport_height {
            self.host_scroll_offset = self.selected_host_row + 1 - viewport_height;
        }
        let max_offset = self.filtered_hosts.len().saturating_sub(viewport_height);
        self.host_scroll_offset = self.host_scroll_offset.min(max_offset);
    }

    /// Record the highlighted host and stop the event loop.
    pub(crate) fn select_host_to_connect(&mut self) {
        if let Some(host) = self.selected_host() {
            log_debug!("Host selected: {}", host);
            self.selected_host_to_connect = Some(host.to_string());
            self.should_exit = true;
        }
    }
}

#[cfg(test)]
#[path = "../../test/tui/state/app_state.rs"]
mod tests;
