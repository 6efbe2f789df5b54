//! Host block appends.

use super::model::NewHostEntry;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

const OPTION_INDENT: &str = "    ";

/// Render the exact text appended for `entry`, leading blank line included.
pub fn render_host_block(entry: &NewHostEntry) -> String {
    format!(
        "\nHost {}\n{OPTION_INDENT}HostName {}\n{OPTION_INDENT}User {}\n",
        entry.name, entry.address, entry.user
    )
}

/// Append `entry` to the config at `config_path`.
///
/// The file is created when missing, but its parent directory must already
/// exist. The block goes out in a single write.
pub fn append_host_entry(config_path: &Path, entry: &NewHostEntry) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(config_path)?;
    file.write_all(render_host_block(entry).as_bytes())?;
    file.flush()
}
