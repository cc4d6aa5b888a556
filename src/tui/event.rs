//! Event handling for the chart screens
//!
//! Chart screens only need to know when to redraw and when the user wants to
//! leave, so events are read synchronously with crossterm.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Terminal events a chart screen reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Block until the next key press or resize
pub fn next_event() -> io::Result<Event> {
    loop {
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(Event::Key(key));
            }
            CrosstermEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
            _ => {}
        }
    }
}

/// Keys that close a chart screen
pub fn is_dismiss_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
