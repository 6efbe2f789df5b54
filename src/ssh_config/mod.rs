//! SSH config alias discovery and host-block appends.
//!
//! The store is a cooperative reader/appender: it scans `Host` lines and
//! appends new blocks at end-of-file, and never rewrites existing content.

mod model;
mod parser;
mod path;
mod writer;

pub use model::NewHostEntry;
pub use parser::{host_alias_from_line, parse_host_aliases};
pub use path::get_default_ssh_config_path;
pub use writer::{append_host_entry, render_host_block};

use crate::log_debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Reader/appender bound to a single SSH config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `~/.ssh/config`.
    pub fn default_location() -> io::Result<Self> {
        let path = get_default_ssh_config_path().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Could not find home directory"))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every addressable host alias, in file order.
    ///
    /// A missing file yields an empty list.
    pub fn load(&self) -> io::Result<Vec<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log_debug!("SSH config not found at {}; no hosts", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        let aliases = parse_host_aliases(BufReader::new(file))?;
        log_debug!("Loaded {} host aliases from {}", aliases.len(), self.path.display());
        Ok(aliases)
    }

    /// Append a new host block at end-of-file.
    pub fn append(&self, entry: &NewHostEntry) -> io::Result<()> {
        append_host_entry(&self.path, entry)?;
        log_debug!("Appended host block '{}' to {}", entry.name, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/store.rs"]
mod tests;
