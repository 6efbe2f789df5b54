//! Add-host modal mouse handling.

use crate::tui::{AppState, FormField};

impl AppState {
    pub(crate) fn handle_add_host_click(&mut self, column: u16, row: u16) {
        let Some(form) = self.add_host.as_mut() else {
            return;
        };
        let Some(field) = form.field_at(column, row) else {
            return;
        };

        form.focused = field;
        if field == FormField::Save {
            self.submit_add_host_modal();
        }
    }
}
