//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;
use tracing::warn;

use super::event::{is_dismiss_key, next_event, Event};
use super::views::{self, Screen};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Initialize the terminal for a full-screen chart
pub fn init_terminal() -> Result<Tui> {
    // Screens open and close many times per session; install the hook once
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal_impl();
            original_hook(panic_info);
        }));
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Show one screen until the user dismisses it
pub fn run_screen(screen: &Screen<'_>) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = event_loop(&mut terminal, screen);

    // Always give the console back, even if drawing failed
    finish_screen(result, restore_terminal())
}

/// Combine the drawing and restore outcomes; a drawing error wins
fn finish_screen(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        warn!(error = %e, "failed to restore terminal");
    }
    result?;
    restored
}

fn event_loop(terminal: &mut Tui, screen: &Screen<'_>) -> Result<()> {
    loop {
        terminal.draw(|frame| views::render(frame, screen))?;

        match next_event()? {
            Event::Key(key) if is_dismiss_key(&key) => return Ok(()),
            Event::Key(_) => {}
            Event::Resize(_, _) => {
                // Redrawn on the next pass
            }
        }
    }
}
