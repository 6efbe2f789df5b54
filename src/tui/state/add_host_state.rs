//! Add-host form state.

use super::focus::FormField;
use super::text_field::TextField;
use crate::ssh_config::NewHostEntry;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Default)]
pub(crate) struct AddHostState {
    pub(crate) name: TextField,
    pub(crate) address: TextField,
    pub(crate) user: TextField,
    pub(crate) focused: FormField,
    pub(crate) error: Option<String>,
    /// Screen rows of each focusable element from the last draw.
    pub(crate) field_areas: Vec<(FormField, Rect)>,
}

impl AddHostState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn field(&self, field: FormField) -> Option<&TextField> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Address => Some(&self.address),
            FormField::User => Some(&self.user),
            FormField::Save => None,
        }
    }

    pub(crate) fn field_mut(&mut self, field: FormField) -> Option<&mut TextField> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Address => Some(&mut self.address),
            FormField::User => Some(&mut self.user),
            FormField::Save => None,
        }
    }

    pub(crate) fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        self.field_mut(self.focused)
    }

    /// Values as typed; nothing is trimmed or validated.
    pub(crate) fn entry(&self) -> NewHostEntry {
        NewHostEntry::new(self.name.as_str(), self.address.as_str(), self.user.as_str())
    }

    pub(crate) fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        self.field_areas
            .iter()
            .find(|(_, area)| row == area.y && column >= area.x && column < area.x.saturating_add(area.width))
            .map(|(field, _)| *field)
    }
}
