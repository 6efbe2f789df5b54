//! Settings file discovery and parsing.

use super::{ConfigError, Settings};
use crate::{log_debug, log_warn};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

const SETTINGS_DIR: &str = ".hostpick";
const SETTINGS_FILE: &str = "hostpick.yaml";

pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    pub fn new() -> Result<Self, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_path(home_dir.join(SETTINGS_DIR).join(SETTINGS_FILE)))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read and parse the settings file. A missing file yields defaults.
    pub fn load_config(&self) -> Result<Settings, ConfigError> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log_debug!("No settings file at {:?}; using defaults", self.config_path);
                return Ok(Settings::default());
            }
            Err(err) => {
                log_warn!("Failed to read settings file {:?}: {}", self.config_path, err);
                return Err(err.into());
            }
        };

        parse_settings(&content)
    }
}

pub(crate) fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yml::from_str::<Settings>(content).map_err(|err| ConfigError::ParseError(err.to_string()))
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
