// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! The main application logic.
//!
//! This is where the selection loop lives, and is where the terminal, the menu, and the keyboard interact.

use std::io;

use isomenu_core::{
    choices::ChoiceSet,
    image::ImageRecord,
    menu::{Menu, MenuKey},
};
use log::{debug, trace};
use ratatui_crossterm::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui_widgets::list::ListState;
use thiserror::Error;

use crate::ui::{session::TerminalSession, theme::Theme};

/// An `Error` that may result from running the [`App`].
#[derive(Error, Debug)]
pub enum AppError {
    /// A frame could not be drawn.
    #[error("Could not draw the menu: {0}")]
    Draw(#[source] io::Error),

    /// Keyboard input could not be read.
    #[error("Could not read input: {0}")]
    Input(#[source] io::Error),

    /// The operator pressed Ctrl-C.
    #[error("Interrupted")]
    Interrupted,
}

/// The current status of the [`App`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState<'a> {
    /// Nothing has been drawn yet.
    Rendered,

    /// The menu is on screen and waiting for keys.
    Navigating,

    /// A choice was committed.
    Committed(&'a ImageRecord),
}

/// The interactive menu.
pub struct App<'a> {
    /// The buttons and the cursor over them.
    pub menu: Menu<'a>,

    /// The list widget's view of the cursor.
    pub list_state: ListState,

    /// The [`Theme`] of the UI.
    pub theme: Theme,

    /// The banner caption.
    pub caption: String,

    /// The current state of the [`App`].
    pub state: AppState<'a>,
}

impl<'a> App<'a> {
    /// Creates an [`App`] offering `choices`, with the first one highlighted.
    #[must_use = "Has no effect if the result is unused"]
    pub fn new(choices: &'a ChoiceSet, theme: Theme, caption: impl Into<String>) -> Self {
        let menu = Menu::new(choices);
        let list_state = ListState::default().with_selected(Some(menu.cursor()));
        Self {
            menu,
            list_state,
            theme,
            caption: caption.into(),
            state: AppState::Rendered,
        }
    }

    /// Provides the main loop for the [`App`].
    ///
    /// Draws, waits for a key, and handles it, until a choice is committed. A resize simply causes the next
    /// frame to be drawn at the new size.
    ///
    /// # Errors
    ///
    /// May return an `Error` if a frame could not be drawn, input could not be read, or Ctrl-C was pressed.
    pub fn run(&mut self, session: &mut TerminalSession) -> Result<&'a ImageRecord, AppError> {
        loop {
            if let AppState::Committed(record) = self.state {
                return Ok(record);
            }

            self.draw(session.terminal_mut()).map_err(AppError::Draw)?;
            self.state = AppState::Navigating;

            match event::read().map_err(AppError::Input)? {
                Event::Key(key) => {
                    self.handle_key(key)?;
                }
                Event::Resize(cols, rows) => trace!("[APP]: resized to {cols}x{rows}"),
                _ => (),
            }
        }
    }

    /// Handles a single key event. Returns the committed record, if the key committed one.
    ///
    /// Only presses are handled. Releases and repeats are ignored.
    ///
    /// # Errors
    ///
    /// May return an `Error` if Ctrl-C was pressed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<&'a ImageRecord>, AppError> {
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            debug!("[APP]: interrupted");
            return Err(AppError::Interrupted);
        }

        let chosen = self.menu.handle(menu_key(key));
        self.list_state.select(Some(self.menu.cursor()));

        if let Some(record) = chosen {
            self.state = AppState::Committed(record);
        }
        Ok(chosen)
    }
}

/// Maps a crossterm key to the [`MenuKey`] it means.
///
/// In raw mode a bare line feed arrives as Ctrl-J, and a carriage return may arrive as Ctrl-M.
fn menu_key(key: KeyEvent) -> MenuKey {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('j' | 'm') => MenuKey::Commit,
            _ => MenuKey::Other,
        };
    }

    match key.code {
        KeyCode::Up => MenuKey::Up,
        KeyCode::Down => MenuKey::Down,
        KeyCode::Enter => MenuKey::Commit,
        KeyCode::Char(c) => MenuKey::from_char(c),
        _ => MenuKey::Other,
    }
}
