//! Interactive host picker.

mod app;
mod features;
mod state;
mod ui;

pub(crate) use state::{AddHostState, AppState, FocusTarget, FormField, FormTransition, Key, MainFocus, MainTransition, StatusMessage};

pub use app::run_host_picker;
