//! Application shell: terminal lifecycle and the event loop.

mod events;
mod run;

pub use run::run_host_picker;
