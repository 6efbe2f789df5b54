//! Add-host modal keyboard handling and submission.

use crate::tui::{AddHostState, AppState, FormTransition, Key, MainFocus, StatusMessage};
use crate::{log_debug, log_error, log_info};

impl AppState {
    pub(crate) fn open_add_host_modal(&mut self) {
        if self.add_host.is_none() {
            log_debug!("Opening add-host form");
            self.add_host = Some(AddHostState::new());
        }
    }

    pub(crate) fn close_add_host_modal(&mut self) {
        if self.add_host.take().is_some() {
            log_debug!("Add-host form closed");
        }
        self.focus = MainFocus::SearchBox;
    }

    pub(crate) fn handle_add_host_key(&mut self, key: Key) {
        let Some(form) = self.add_host.as_mut() else {
            return;
        };

        match form.focused.on_key(key) {
            FormTransition::Moved => {}
            FormTransition::Cancel => self.close_add_host_modal(),
            FormTransition::Submit => self.submit_add_host_modal(),
            FormTransition::Forward => {
                let Some(field) = form.focused_field_mut() else {
                    return;
                };
                match key {
                    Key::Char(ch) if key.is_printable() => field.insert_char(ch),
                    Key::Backspace => {
                        field.backspace();
                    }
                    Key::Delete => {
                        field.delete();
                    }
                    Key::Left => field.move_left(),
                    Key::Right => field.move_right(),
                    Key::Home => field.move_home(),
                    Key::End => field.move_end(),
                    _ => {}
                }
            }
        }
    }

    pub(crate) fn handle_add_host_paste(&mut self, pasted: &str) {
        if let Some(field) = self.add_host.as_mut().and_then(AddHostState::focused_field_mut) {
            field.insert_str(pasted);
        }
    }

    /// Append the form's entry to the config file.
    ///
    /// On success the modal closes and the host list is reloaded from disk.
    /// On failure the modal stays open with the error shown inline.
    pub(crate) fn submit_add_host_modal(&mut self) {
        let Some(form) = self.add_host.as_mut() else {
            return;
        };

        let entry = form.entry();
        match self.store.append(&entry) {
            Ok(()) => {
                log_info!("Added host '{}' to {}", entry.name, self.store.path().display());
                self.close_add_host_modal();
                self.status = Some(StatusMessage::info(format!("Added host {}", entry.name)));
                self.refresh_hosts();
            }
            Err(err) => {
                log_error!("Failed to append host '{}': {}", entry.name, err);
                form.error = Some(format!("Could not write {}: {}", self.store.path().display(), err));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/add_host/input.rs"]
mod tests;
