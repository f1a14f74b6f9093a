//! App widget implementation.

use ratatui_core::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::{app::App, ui::BANNER_HEIGHT};

impl Widget for &mut App<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // the banner on top, the buttons centred in whatever is left
        let [banner, body] =
            Layout::vertical([Constraint::Length(BANNER_HEIGHT), Constraint::Fill(1)]).areas(area);

        self.render_banner(banner, buf);
        self.render_list(body, buf);
    }
}
