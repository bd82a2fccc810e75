//! src/view/components/empty_info.rs

use ratatui::{prelude::*, widgets::Paragraph};

use crate::view::theme::Palette;

pub const EMPTY_MESSAGE: &str = "The cookies list is empty.";

pub struct EmptyInfo;

impl EmptyInfo {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, palette: &Palette, area: Rect) {
        let line = Rect {
            x: area.x + 2,
            width: area.width.saturating_sub(2),
            height: 1.min(area.height),
            ..area
        };
        frame.render_widget(Paragraph::new(EMPTY_MESSAGE).style(palette.empty_info()), line);
    }
}

impl Default for EmptyInfo {
    fn default() -> Self {
        Self::new()
    }
}
