//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and keyboard event polling for the hunt.

use crate::{HuntError, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    panic::{set_hook, take_hook},
    time::Duration,
};

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)
            .map_err(|e| HuntError::TuiError(format!("Failed to create terminal: {}", e)))?;

        Ok(Self {
            terminal,
            tick_rate,
            active: false,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> Result<()> {
        enable_raw_mode()
            .map_err(|e| HuntError::TuiError(format!("Failed to enable raw mode: {}", e)))?;
        self.active = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for a key press
    pub fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        if event::poll(self.tick_rate)? {
            // Windows reports releases as well; only presses drive the flow
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!("Failed to restore terminal: {}", err);
        }
    }
}

/// Install a panic hook that leaves raw mode before the panic is reported
pub fn init_panic_hook() {
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);

        original_hook(panic_info);
    }));
}
