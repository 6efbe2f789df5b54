//! Feature-sliced TUI behavior.

pub(crate) mod add_host;
pub(crate) mod host_browser;
