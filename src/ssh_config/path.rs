//! Path helpers for SSH config discovery.

use std::path::PathBuf;

/// Get the default SSH config path.
pub fn get_default_ssh_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("config"))
}
