//! Session handoff to an external SSH client.
//!
//! The alias always travels as its own process argument. On macOS it reaches
//! AppleScript through `argv` and is quoted there with `quoted form of`, so no
//! shell or script text is ever built from it.

use crate::command_path;
use crate::config::GeneralSettings;
use crate::{log_debug, log_info, log_warn};
use std::{error::Error, fmt, io, path::PathBuf, process::Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }
}

/// Program a launch plan runs; resolved to a checked path right before spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchProgram {
    Ssh,
    Osascript,
}

impl LaunchProgram {
    fn resolve(self) -> io::Result<PathBuf> {
        match self {
            LaunchProgram::Ssh => command_path::ssh_path(),
            LaunchProgram::Osascript => command_path::osascript_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: LaunchProgram,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Started,
    Unsupported(String),
}

#[derive(Debug)]
pub enum LaunchError {
    /// The client program could not be located or failed validation.
    CommandNotFound(io::Error),
    /// The client program was found but could not be started.
    Spawn(io::Error),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::CommandNotFound(err) => write!(f, "SSH launcher not available: {}", err),
            LaunchError::Spawn(err) => write!(f, "Failed to start SSH session: {}", err),
        }
    }
}

impl Error for LaunchError {}

pub struct SessionLauncher {
    platform: Platform,
    terminal_app: String,
}

impl SessionLauncher {
    pub fn new(platform: Platform, terminal_app: impl Into<String>) -> Self {
        Self {
            platform,
            terminal_app: terminal_app.into(),
        }
    }

    pub fn from_settings(settings: &GeneralSettings) -> Self {
        Self::new(Platform::current(), settings.terminal_app.clone())
    }

    /// Describe what `launch` would run for `alias`, or `None` when the platform
    /// has no launcher.
    pub fn plan(&self, alias: &str) -> Option<LaunchPlan> {
        match self.platform {
            Platform::Windows => Some(LaunchPlan {
                program: LaunchProgram::Ssh,
                args: vec![alias.to_string()],
            }),
            Platform::MacOs => {
                let app = applescript_string_literal(&self.terminal_app);
                let mut args = Vec::new();
                for statement in [
                    "on run argv".to_string(),
                    format!("tell application {app}"),
                    "activate".to_string(),
                    "do script \"ssh \" & quoted form of (item 1 of argv)".to_string(),
                    "end tell".to_string(),
                    "end run".to_string(),
                ] {
                    args.push("-e".to_string());
                    args.push(statement);
                }
                args.push(alias.to_string());
                Some(LaunchPlan {
                    program: LaunchProgram::Osascript,
                    args,
                })
            }
            Platform::Other => None,
        }
    }

    /// Start an SSH session for `alias`.
    ///
    /// The child's output is not captured and its exit status is only logged.
    pub fn launch(&self, alias: &str) -> Result<LaunchOutcome, LaunchError> {
        let Some(plan) = self.plan(alias) else {
            let message = format!("Launching SSH sessions is not supported on {} yet", std::env::consts::OS);
            log_warn!("{}", message);
            return Ok(LaunchOutcome::Unsupported(message));
        };

        let program = plan.program.resolve().map_err(LaunchError::CommandNotFound)?;
        log_info!("Launching {:?} for host '{}'", program, alias);

        let status = Command::new(&program).args(&plan.args).status().map_err(LaunchError::Spawn)?;
        if !status.success() {
            log_warn!("Launcher exited with code: {:?}", status.code());
        } else {
            log_debug!("Launcher finished for host '{}'", alias);
        }

        Ok(LaunchOutcome::Started)
    }
}

fn applescript_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            literal.push('\\');
        }
        literal.push(ch);
    }
    literal.push('"');
    literal
}

#[cfg(test)]
#[path = "test/launcher.rs"]
mod tests;
