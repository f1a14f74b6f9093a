// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`Theme`], which exposes the color scheme for the UI.

use std::env;

use ratatui_core::style::{Color, Style};
use ratatui_crossterm::crossterm::style::available_color_count;

use crate::ui::session::TerminalError;

/// How many colors the terminal can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSupport {
    /// 24 bit color.
    TrueColor,

    /// The xterm 256 color palette.
    Palette256,

    /// Only the eight basic colors.
    Basic,
}

impl ColorSupport {
    /// Resolves the color support of the current terminal from the environment.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the terminal has no capabilities at all.
    pub fn detect() -> Result<Self, TerminalError> {
        if env::var_os("TERM").is_some_and(|term| term == "dumb") {
            return Err(TerminalError::Dumb);
        }
        Ok(Self::from_count(available_color_count()))
    }

    /// Picks the richest support that `count` colors allow.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn from_count(count: u16) -> Self {
        match count {
            u16::MAX => Self::TrueColor,
            256.. => Self::Palette256,
            _ => Self::Basic,
        }
    }

    /// Returns the (orange, white, green, black) colors to use.
    const fn palette(self) -> [Color; 4] {
        match self {
            Self::TrueColor => [
                Color::Rgb(0xE9, 0x54, 0x20),
                Color::Rgb(0xFF, 0xFF, 0xFF),
                Color::Rgb(0x0E, 0x84, 0x20),
                Color::Rgb(0x00, 0x00, 0x00),
            ],
            Self::Palette256 => [
                Color::Indexed(202),
                Color::Indexed(231),
                Color::Indexed(28),
                Color::Indexed(0),
            ],
            Self::Basic => [Color::Red, Color::White, Color::Green, Color::Black],
        }
    }
}

/// The color scheme of the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    /// The half block rows above and below the caption.
    pub banner_edge: Style,

    /// The caption row.
    pub banner_text: Style,

    /// The highlighted button.
    pub highlight: Style,

    /// Everything else. This is the terminal's own default.
    pub base: Style,
}

impl Theme {
    /// Create a new [`Theme`] from a [`ColorSupport`].
    #[must_use = "Has no effect if the result is unused"]
    pub const fn new(support: ColorSupport) -> Self {
        let [orange, white, green, black] = support.palette();
        Self {
            banner_edge: Style::new().fg(black).bg(orange),
            banner_text: Style::new().fg(white).bg(orange),
            highlight: Style::new().fg(white).bg(green),
            base: Style::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_count() {
        assert_eq!(ColorSupport::from_count(u16::MAX), ColorSupport::TrueColor);
        assert_eq!(ColorSupport::from_count(256), ColorSupport::Palette256);
        assert_eq!(ColorSupport::from_count(8), ColorSupport::Basic);
        assert_eq!(ColorSupport::from_count(0), ColorSupport::Basic);
    }

    #[test]
    fn test_true_color_theme() {
        let theme = Theme::new(ColorSupport::TrueColor);
        assert_eq!(theme.banner_edge.bg, Some(Color::Rgb(0xE9, 0x54, 0x20)));
        assert_eq!(theme.banner_edge.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(theme.highlight.bg, Some(Color::Rgb(0x0E, 0x84, 0x20)));
        assert_eq!(theme.base, Style::new());
    }

    #[test]
    fn test_basic_theme() {
        let theme = Theme::new(ColorSupport::Basic);
        assert_eq!(theme.banner_text, Style::new().fg(Color::White).bg(Color::Red));
        assert_eq!(theme.highlight, Style::new().fg(Color::White).bg(Color::Green));
    }
}
