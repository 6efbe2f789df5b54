//! TUI bootstrap and teardown lifecycle.

use super::events::run_app;
use crate::ssh_config::ConfigStore;
use crate::tui::AppState;
use crate::{log_debug, log_error};
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[derive(Debug, Default)]
struct TerminalModeGuard {
    active: bool,
}

impl TerminalModeGuard {
    // Terminal mode lifecycle.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { active: true };
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste) {
            guard.cleanup();
            return Err(err);
        }
        Ok(guard)
    }

    fn cleanup(&mut self) {
        if !self.active {
            return;
        }

        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, DisableBracketedPaste);
        self.active = false;
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Run the interactive host picker over the hosts in `store`.
///
/// Returns the alias the user chose, or `None` when they quit. The terminal is
/// fully restored before this returns, so the caller can hand the terminal to
/// an SSH client.
pub fn run_host_picker(store: ConfigStore) -> io::Result<Option<String>> {
    log_debug!("Starting host picker");

    let mut mode_guard = TerminalModeGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(store);
    let result = run_app(&mut terminal, &mut app);
    let selected_host = app.selected_host_to_connect.take();
    let show_cursor_result = terminal.show_cursor();

    mode_guard.cleanup();

    if let Err(err) = result {
        log_error!("Host picker error: {}", err);
        return Err(err);
    }

    if let Err(err) = show_cursor_result {
        log_error!("Failed to restore cursor visibility: {}", err);
        return Err(err);
    }

    log_debug!("Host picker exited with selection: {:?}", selected_host);
    Ok(selected_host)
}
