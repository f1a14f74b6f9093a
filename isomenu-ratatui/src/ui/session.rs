// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`TerminalSession`], exclusive ownership of the controlling terminal.
//!
//! Acquiring the session puts the terminal into raw mode on the alternate screen with the cursor hidden.
//! Dropping it puts everything back, whether the menu finished, failed, or panicked.

use std::io::{self, IsTerminal, Stdout};

use log::{debug, warn};
use ratatui_core::terminal::Terminal;
use ratatui_crossterm::{
    CrosstermBackend,
    crossterm::{
        cursor::{Hide, Show},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use thiserror::Error;

/// An `Error` that may result from acquiring the terminal.
#[derive(Error, Debug)]
pub enum TerminalError {
    /// Standard input or output is not a terminal.
    #[error("Standard input and output must both be a terminal")]
    NotATerminal,

    /// The terminal declares that it has no capabilities.
    #[error("The terminal type \"dumb\" cannot show a menu")]
    Dumb,

    /// Raw mode could not be entered.
    #[error("Could not enter raw mode: {0}")]
    RawMode(#[source] io::Error),

    /// The screen could not be prepared.
    #[error("Could not set up the screen: {0}")]
    Screen(#[source] io::Error),
}

/// The terminal, in the state the menu needs, for as long as this lives.
pub struct TerminalSession {
    /// The ratatui terminal drawing to standard output.
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Takes over the terminal.
    ///
    /// # Errors
    ///
    /// May return an `Error` if standard input or output is not a terminal, or the terminal could not be put into
    /// raw mode on the alternate screen. Anything already changed is undone before returning.
    pub fn acquire() -> Result<Self, TerminalError> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(TerminalError::NotATerminal);
        }

        enable_raw_mode().map_err(TerminalError::RawMode)?;

        match Self::prepare_screen() {
            Ok(terminal) => {
                debug!("[SESSION]: terminal acquired");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore();
                Err(TerminalError::Screen(e))
            }
        }
    }

    /// Enters the alternate screen, hides the cursor, and clears the screen.
    ///
    /// # Errors
    ///
    /// May return an `Error` if any of the terminal commands failed.
    fn prepare_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(terminal)
    }

    /// Returns the terminal to draw on.
    pub const fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        debug!("[SESSION]: terminal released");
    }
}

/// Leaves raw mode and the alternate screen, and shows the cursor again.
///
/// Every step is attempted even if an earlier one fails.
fn restore() {
    if let Err(e) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
        warn!("[SESSION]: could not restore the screen: {e}");
    }
    if let Err(e) = disable_raw_mode() {
        warn!("[SESSION]: could not leave raw mode: {e}");
    }
}
