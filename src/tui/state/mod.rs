//! TUI state model split by feature domain.

mod add_host_state;
mod app_state;
mod focus;
mod text_field;

pub(crate) use add_host_state::AddHostState;
pub(crate) use app_state::{AppState, StatusMessage};
pub(crate) use focus::{FocusTarget, FormField, FormTransition, Key, MainFocus, MainTransition};
