// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! The selection state machine, independent of any terminal.
//!
//! A [`Menu`] is a list of fixed-width buttons and a cursor into that list. Keys are fed in through
//! [`Menu::handle`], which applies the pure transition function [`step`]. A frontend only has to translate its
//! own input events into [`MenuKey`] and draw [`Menu::buttons`] with the cursor highlighted.

use log::trace;
use unicode_width::UnicodeWidthStr;

use crate::{choices::ChoiceSet, image::ImageRecord};

/// The characters a button adds around its label: `"[ "`, `" ▸ ]"`.
const BUTTON_DECORATION: usize = 6;

/// A key, reduced to what the menu cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    /// Move the cursor up by one.
    Up,

    /// Move the cursor down by one.
    Down,

    /// Commit the choice under the cursor.
    Commit,

    /// Anything else. Ignored.
    Other,
}

impl MenuKey {
    /// Maps a printable character to a [`MenuKey`].
    ///
    /// Return, newline and space commit. Everything else is ignored.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn from_char(c: char) -> Self {
        match c {
            '\r' | '\n' | ' ' => Self::Commit,
            _ => Self::Other,
        }
    }
}

/// The outcome of a single key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The cursor is now at this index. It may not have moved.
    Moved(usize),

    /// The choice at this index was committed.
    Committed(usize),
}

/// Applies `key` to a menu of `len` entries whose cursor is at `cursor`.
///
/// Movement clamps at both ends and never wraps around.
#[must_use = "Has no effect if the result is unused"]
pub const fn step(len: usize, cursor: usize, key: MenuKey) -> Step {
    let last = len.saturating_sub(1);
    let cursor = if cursor > last { last } else { cursor };
    match key {
        MenuKey::Up => Step::Moved(cursor.saturating_sub(1)),
        MenuKey::Down => Step::Moved(if cursor < last { cursor + 1 } else { last }),
        MenuKey::Commit => Step::Committed(cursor),
        MenuKey::Other => Step::Moved(cursor),
    }
}

/// Formats `label` as a button `width` terminal cells wide.
///
/// `width` includes the decoration, so it must be at least the label's display width plus 6 for the buttons to
/// line up. Padding is counted in cells, so wide and combining characters keep the buttons aligned.
#[must_use = "Has no effect if the result is unused"]
pub fn button_text(label: &str, width: usize) -> String {
    let pad = width
        .saturating_sub(BUTTON_DECORATION)
        .saturating_sub(label.width());
    format!("[ {label}{:pad$} \u{25b8} ]", "")
}

/// The buttons of a [`ChoiceSet`], and the cursor over them.
#[derive(Debug)]
pub struct Menu<'a> {
    /// The choices being offered.
    choices: &'a ChoiceSet,

    /// The button text for every choice, all of equal width.
    buttons: Vec<String>,

    /// The width of every button, in terminal cells.
    width: usize,

    /// The index of the highlighted choice.
    cursor: usize,
}

impl<'a> Menu<'a> {
    /// Creates a [`Menu`] over `choices`, with the first choice highlighted.
    #[must_use = "Has no effect if the result is unused"]
    pub fn new(choices: &'a ChoiceSet) -> Self {
        let width = choices
            .records()
            .iter()
            .map(|x| x.label().width())
            .max()
            .unwrap_or_default()
            + BUTTON_DECORATION;

        let buttons = choices
            .records()
            .iter()
            .map(|x| button_text(x.label(), width))
            .collect();

        Self {
            choices,
            buttons,
            width,
            cursor: 0,
        }
    }

    /// Returns the button text for every choice, in order.
    #[must_use = "Has no effect if the result is unused"]
    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    /// Returns the shared width of the buttons, in terminal cells.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the index of the highlighted choice.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the highlighted record.
    #[must_use = "Has no effect if the result is unused"]
    pub fn selected(&self) -> Option<&'a ImageRecord> {
        self.choices.get(self.cursor)
    }

    /// Feeds a key into the menu. Returns the committed record, if the key committed one.
    pub fn handle(&mut self, key: MenuKey) -> Option<&'a ImageRecord> {
        match step(self.choices.len(), self.cursor, key) {
            Step::Moved(cursor) => {
                if cursor != self.cursor {
                    trace!("[MENU]: cursor {} -> {cursor}", self.cursor);
                }
                self.cursor = cursor;
                None
            }
            Step::Committed(index) => self.choices.get(index),
        }
    }
}
