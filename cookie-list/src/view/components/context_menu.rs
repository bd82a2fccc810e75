//! src/view/components/context_menu.rs
//! Popup with the bulk actions, anchored under the menu trigger.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    model::menu_state::{MenuOption, MenuState},
    view::{hit_map::HitMap, icons, theme::Palette},
};

const MENU_WIDTH: u16 = 22;

pub struct ContextMenu;

impl ContextMenu {
    pub fn new() -> Self {
        Self
    }

    /// Popup rect below `anchor`, kept inside `bounds`.
    pub fn popup_area(anchor: Rect, bounds: Rect) -> Rect {
        let height = MenuOption::ALL.len() as u16 + 2;
        let width = MENU_WIDTH.min(bounds.width);
        let x = anchor.x.min(bounds.right().saturating_sub(width)).max(bounds.x);
        let y = (anchor.y + 1).min(bounds.bottom().saturating_sub(height)).max(bounds.y);
        Rect::new(x, y, width, height).intersection(bounds)
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        menu: &MenuState,
        palette: &Palette,
        area: Rect,
        hits: &mut HitMap,
    ) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .style(palette.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        hits.menu_popup = Some(area);

        for (slot, option) in MenuOption::ALL.into_iter().enumerate() {
            let line = Rect::new(inner.x, inner.y + slot as u16, inner.width, 1);
            if line.y >= inner.bottom() {
                break;
            }

            let (icon, icon_style) = match option {
                MenuOption::ExportSelected => (icons::EXPORT_ICON, palette.export_item()),
                MenuOption::DeleteSelected => (icons::DELETE_ICON, palette.delete_item()),
            };
            let highlighted = menu.highlighted() == Some(option);

            let text = Line::from(vec![
                Span::styled(format!(" {icon} "), icon_style),
                Span::raw(option.label()),
            ]);
            frame.render_widget(
                Paragraph::new(text).style(palette.menu_item(highlighted)),
                line,
            );
            hits.menu_options.push((option, line));
        }
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}
