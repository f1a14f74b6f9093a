// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! The user interface of the menu.
//!
//! The screen is a three row banner across the top, with the caption on the middle row between two rows of half
//! blocks, and a column of equally wide buttons centred in the space below it. The highlighted button is the only
//! one drawn in color.

use ratatui_core::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    terminal::Terminal,
    widgets::{StatefulWidget, Widget},
};
use ratatui_widgets::{
    list::{List, ListItem},
    paragraph::Paragraph,
};

use crate::app::App;

mod widget;

pub mod session;
pub mod theme;

/// The number of rows taken by the banner.
pub const BANNER_HEIGHT: u16 = 3;

impl App<'_> {
    /// Draw a frame to the screen.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the widgets could not be drawn to the screen.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), B::Error> {
        terminal.draw(|f| f.render_widget(self, f.area()))?;
        Ok(())
    }

    /// Renders the banner and its caption into the top three rows of `area`.
    pub fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let fill = |c: &str| c.repeat(usize::from(area.width));
        let rows = [
            Paragraph::new(fill("\u{2580}")).style(self.theme.banner_edge),
            Paragraph::new(self.caption.as_str())
                .style(self.theme.banner_text)
                .centered(),
            Paragraph::new(fill("\u{2584}")).style(self.theme.banner_edge),
        ];

        for (row, paragraph) in (area.y..area.bottom()).zip(rows) {
            Widget::render(paragraph, Rect::new(area.x, row, area.width, 1), buf);
        }
    }

    /// Renders the buttons, centred in `area`.
    pub fn render_list(&mut self, area: Rect, buf: &mut Buffer) {
        let buttons = self.menu.buttons();
        let width = u16::try_from(self.menu.width()).unwrap_or(u16::MAX);
        let height = u16::try_from(buttons.len()).unwrap_or(u16::MAX);

        let list = List::new(buttons.iter().map(|x| ListItem::new(x.as_str())))
            .style(self.theme.base)
            .highlight_style(self.theme.highlight);

        StatefulWidget::render(
            list,
            center_rect(area, width, height),
            buf,
            &mut self.list_state,
        );
    }
}

/// Returns a `width` by `height` rectangle centred in `area`, shrunk to fit if `area` is too small.
#[must_use = "Has no effect if the result is unused"]
pub const fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = if width < area.width { width } else { area.width };
    let height = if height < area.height { height } else { area.height };
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use isomenu_core::choices::ChoiceSet;
    use ratatui_core::{backend::TestBackend, style::Color};

    use super::*;
    use crate::ui::theme::{ColorSupport, Theme};

    const SUM: &str = "e240e4b801f7bb68c20d1356b60968ad0c33a41d00d828e74ceb3364a0317be9";

    fn choices(oses: &[&str]) -> ChoiceSet {
        let feeds = oses.iter().map(|os| {
            let feed = format!(
                r#"{{"products": {{"p": {{"arch": "amd64", "os": "{os}", "version": "24.04", "versions": {{
                    "1": {{"items": {{"iso": {{"ftype": "iso", "path": "{os}.iso", "sha256": "{SUM}", "size": 1}}}}}}
                }}}}}}}}"#
            );
            (feed, "amd64".to_owned())
        });
        ChoiceSet::build(feeds, "https://mirror").expect("feeds should be valid")
    }

    /// Returns the text of row `y` of `buf`.
    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 3, 40, 7);
        assert_eq!(center_rect(area, 26, 2), Rect::new(7, 5, 26, 2));
        assert_eq!(center_rect(area, 50, 9), area);
        assert_eq!(center_rect(Rect::new(0, 3, 0, 0), 10, 1), Rect::new(0, 3, 0, 0));
    }

    #[test]
    fn test_render() {
        let choices = choices(&["ubuntu-server", "ubuntu-desktop"]);
        let theme = Theme::new(ColorSupport::TrueColor);
        let mut app = App::new(&choices, theme, "Pick one");
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("test backend is infallible");
        app.draw(&mut terminal).expect("test backend is infallible");

        let buf = terminal.backend().buffer();
        assert_eq!(row(buf, 0), "\u{2580}".repeat(40));
        assert_eq!(row(buf, 1), format!("{:^40}", "Pick one"));
        assert_eq!(row(buf, 2), "\u{2584}".repeat(40));
        assert_eq!(buf[(0, 0)].style().bg, theme.banner_edge.bg);
        assert_eq!(buf[(0, 1)].style().fg, theme.banner_text.fg);

        // two 26 column buttons, centred in the 7 rows below the banner
        assert_eq!(row(buf, 5), format!("       {}       ", app.menu.buttons()[0]));
        assert_eq!(row(buf, 6), format!("       {}       ", app.menu.buttons()[1]));
        assert_eq!(row(buf, 4).trim(), "");
        assert_eq!(row(buf, 7).trim(), "");

        assert_eq!(buf[(7, 5)].style().bg, theme.highlight.bg);
        assert_eq!(buf[(32, 5)].style().bg, theme.highlight.bg);
        assert_eq!(buf[(7, 6)].style().bg, Some(Color::Reset));
    }

    #[test]
    fn test_render_follows_cursor() {
        let choices = choices(&["ubuntu-server", "ubuntu-desktop"]);
        let theme = Theme::new(ColorSupport::Basic);
        let mut app = App::new(&choices, theme, "Pick one");
        app.menu.handle(isomenu_core::menu::MenuKey::Down);
        app.list_state.select(Some(app.menu.cursor()));

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("test backend is infallible");
        app.draw(&mut terminal).expect("test backend is infallible");

        let buf = terminal.backend().buffer();
        assert_eq!(buf[(7, 5)].style().bg, Some(Color::Reset));
        assert_eq!(buf[(7, 6)].style().bg, theme.highlight.bg);
    }

    #[test]
    fn test_tiny_screen() {
        let choices = choices(&["ubuntu-server", "ubuntu-desktop"]);
        let mut app = App::new(&choices, Theme::default(), "Pick one");
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).expect("test backend is infallible");
        app.draw(&mut terminal).expect("test backend is infallible");
    }
}
