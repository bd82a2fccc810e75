//! src/view/components/cookie_rows.rs

use ratatui::{
    prelude::*,
    widgets::{HighlightSpacing, List, ListItem, ListState as TuiListState},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    controller::selection_controller::SelectionController,
    model::{cookie::CookieItem, list_type::ListType},
    view::{
        hit_map::{HitMap, RowRegions},
        icons,
        theme::Palette,
    },
};

const DETAILS_WIDTH: u16 = icons::DETAILS_LABEL.len() as u16 + 2;

pub struct CookieRows;

impl CookieRows {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        controller: &SelectionController,
        palette: &Palette,
        area: Rect,
        tui_state: &mut TuiListState,
        hits: &mut HitMap,
    ) {
        let state = controller.state();
        let list_type = controller.list_type();

        let rows: Vec<ListItem> = state
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let selected = state.is_selected(index);
                let item = ListItem::new(row_lines(item, selected, list_type, area.width, palette));
                if selected {
                    item.style(palette.selected_row())
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(rows)
            .style(palette.base())
            .highlight_style(palette.cursor_row())
            .highlight_spacing(HighlightSpacing::Never);

        tui_state.select(state.cursor());
        frame.render_stateful_widget(list, area, tui_state);

        record_rows(hits, area, tui_state.offset(), state.len(), list_type);
    }
}

impl Default for CookieRows {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows that fit in `height` terminal lines.
pub fn visible_rows(height: u16, list_type: ListType) -> usize {
    usize::from(height / list_type.row_height())
}

fn record_rows(hits: &mut HitMap, area: Rect, offset: usize, len: usize, list_type: ListType) {
    let height = list_type.row_height();
    let icon_width = list_type.icon_width().min(area.width);
    let details_width = DETAILS_WIDTH.min(area.width);

    hits.rows = (offset..len)
        .take(visible_rows(area.height, list_type))
        .enumerate()
        .map(|(slot, index)| {
            let y = area.y + slot as u16 * height;
            RowRegions {
                index,
                row: Rect::new(area.x, y, area.width, height),
                checkbox: Rect::new(area.x, y, icon_width, 1),
                details: Rect::new(area.right() - details_width, y, details_width, 1),
            }
        })
        .collect();
}

fn row_lines(
    item: &CookieItem,
    selected: bool,
    list_type: ListType,
    width: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let icon_width = usize::from(list_type.icon_width());
    let width = usize::from(width);

    let checkbox = format!(
        " {:<pad$}",
        icons::checkbox(selected),
        pad = icon_width.saturating_sub(1)
    );
    let details = format!(" {} ", icons::DETAILS_LABEL);

    // the name may take half of what sits between checkbox and details,
    // then location, then value; the gap pads out to the details button
    let mut room = width.saturating_sub(icon_width + details.width());
    let name = truncate(&format!("{}: ", item.name), room / 2);
    room -= name.width();
    let secondary = if list_type.has_two_lines() {
        String::new()
    } else {
        truncate(&format!("  {}", item.location()), room)
    };
    room -= secondary.width();
    let value = truncate(&item.value, room);
    let gap = room - value.width();

    let mut lines = vec![Line::from(vec![
        Span::styled(checkbox, palette.checkbox(selected)),
        Span::styled(name, palette.cookie_name()),
        Span::raw(value),
        Span::styled(secondary, palette.location()),
        Span::raw(" ".repeat(gap)),
        Span::styled(details, palette.action_button()),
    ])];

    if list_type.has_two_lines() {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(icon_width)),
            Span::styled(
                truncate(&item.location(), width.saturating_sub(icon_width)),
                palette.location(),
            ),
        ]));
    }

    // spacer lines up to the row height
    while lines.len() < usize::from(list_type.row_height()) {
        lines.push(Line::default());
    }
    lines
}

/// Cuts `text` to at most `max` terminal columns, ending in `…` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
