//! Event loop and top-level event routing.

use crate::tui::{AppState, Key};
use crate::{debug_enabled, log_debug};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, Stdout},
    time::Instant,
};

/// Map a terminal key press to the focus controllers' key identity.
///
/// Key releases are dropped. Chords with Ctrl or Alt other
/// than Ctrl+N map to [`Key::Other`] so they never reach a text field.
pub(crate) fn key_from_event(key: &KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let chorded = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let mapped = match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::CtrlN,
        KeyCode::Char(_) if chorded => Key::Other,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };
    Some(mapped)
}

impl AppState {
    /// Route a key to the modal when it is open, otherwise to the main screen.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        let Some(key) = key_from_event(&key) else {
            return;
        };

        if self.add_host.is_some() {
            self.handle_add_host_key(key);
        } else {
            self.handle_main_key(key);
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.add_host.is_some() {
                    self.handle_add_host_click(mouse.column, mouse.row);
                } else {
                    self.handle_main_click(mouse.column, mouse.row);
                }
            }
            MouseEventKind::ScrollDown if self.add_host.is_none() => self.handle_main_scroll(true),
            MouseEventKind::ScrollUp if self.add_host.is_none() => self.handle_main_scroll(false),
            _ => {}
        }
    }

    pub(crate) fn handle_paste(&mut self, pasted: &str) {
        if self.add_host.is_some() {
            self.handle_add_host_paste(pasted);
        } else {
            self.handle_search_paste(pasted);
        }
    }
}

pub(crate) fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut AppState) -> io::Result<()> {
    loop {
        let render_started_at = Instant::now();
        terminal.draw(|frame| app.draw(frame))?;
        if debug_enabled!() {
            log_debug!("TUI frame rendered in {:?}", render_started_at.elapsed());
        }

        if app.should_exit {
            break;
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Paste(pasted) => app.handle_paste(&pasted),
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../test/tui/app/events.rs"]
mod tests;
