//! Debug log file writer
//!
//! Entries are appended to `~/.hostpick/logs/hostpick.log` with a timestamp
//! and level tag. The file is opened lazily on the first entry.

use super::{LogError, LogLevel, formatter::LogFormatter};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

pub(super) struct DebugLogger {
    formatter: LogFormatter,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::new(true, true),
            writer: Mutex::new(None),
        }
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let mut writer_guard = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("Debug log lock poisoned; continuing with recovered state");
                poisoned.into_inner()
            }
        };

        if writer_guard.is_none() {
            *writer_guard = Some(BufWriter::new(Self::create_log_file()?));
        }

        let formatted = self.formatter.format(Some(level), message);
        if let Some(writer) = writer_guard.as_mut() {
            writer.write_all(formatted.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let mut writer_guard = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(writer) = writer_guard.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn create_log_file() -> Result<File, LogError> {
        let log_path = Self::get_debug_log_path()?;
        open_private_append_file(&log_path)
    }

    fn get_debug_log_path() -> Result<PathBuf, LogError> {
        let home_dir = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?;

        let log_dir = home_dir.join(".hostpick").join("logs");
        create_private_directory(&log_dir)?;

        Ok(log_dir.join("hostpick.log"))
    }
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path)?;
    set_private_directory_permissions(path)
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    set_private_file_permissions(path)?;
    Ok(file)
}

#[cfg(unix)]
fn set_private_directory_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_directory_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(unix)]
fn set_private_file_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_file_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
