//! src/view/components/header_bar.rs
//! Select-all checkbox, selection counter with menu trigger, search field.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    controller::selection_controller::{Focus, SelectionController},
    view::{hit_map::HitMap, icons, theme::Palette},
};

pub const HEADER_HEIGHT: u16 = 3;
const SEARCH_WIDTH: u16 = 32;

pub struct HeaderBar;

impl HeaderBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        controller: &SelectionController,
        palette: &Palette,
        area: Rect,
        hits: &mut HitMap,
    ) {
        let search_width = SEARCH_WIDTH.min(area.width / 2);
        let [checkbox_col, selection_col, search_col] = Layout::horizontal([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(search_width),
        ])
        .areas(area);

        // text sits on the middle line of the header
        let mid = |r: Rect| Rect {
            y: r.y + r.height.min(HEADER_HEIGHT) / 2,
            height: 1.min(r.height),
            ..r
        };

        let state = controller.state();
        let checkbox = Rect {
            x: checkbox_col.x + 1,
            width: 3.min(checkbox_col.width.saturating_sub(1)),
            ..mid(checkbox_col)
        };
        frame.render_widget(
            Paragraph::new(icons::checkbox(state.all_selected()))
                .style(palette.checkbox(state.all_selected())),
            checkbox,
        );
        hits.select_all = Some(checkbox);

        if state.has_selection() {
            self.render_selection(frame, controller, palette, mid(selection_col), hits);
        }

        self.render_search(frame, controller, palette, search_col, hits);
    }

    fn render_selection(
        &self,
        frame: &mut Frame<'_>,
        controller: &SelectionController,
        palette: &Palette,
        line: Rect,
        hits: &mut HitMap,
    ) {
        let counter = format!(" {} item(s) selected", controller.state().selection_len());
        let counter_width = (counter.chars().count() as u16).min(line.width);

        frame.render_widget(
            Paragraph::new(counter.as_str()).style(palette.counter()),
            Rect {
                width: counter_width,
                ..line
            },
        );

        let trigger = Rect {
            x: line.x + counter_width + 2,
            width: 3,
            ..line
        }
        .intersection(line);
        if trigger.is_empty() {
            return;
        }

        let style = if controller.menu().is_open() {
            palette.menu_item(true)
        } else {
            palette.action_button()
        };
        frame.render_widget(
            Paragraph::new(format!(" {} ", icons::MORE_VERT)).style(style),
            trigger,
        );
        hits.menu_trigger = Some(trigger);
    }

    fn render_search(
        &self,
        frame: &mut Frame<'_>,
        controller: &SelectionController,
        palette: &Palette,
        area: Rect,
        hits: &mut HitMap,
    ) {
        let focused = controller.focus() == Focus::Search;
        let field = controller.search();

        let block = if controller.outlined() {
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(palette.search(focused))
        } else {
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.search(focused))
        };

        let line = if field.is_empty() && !focused {
            Line::from(vec![
                Span::styled(format!("{} ", icons::SEARCH_ICON), palette.location()),
                Span::styled("Search", palette.location()),
            ])
        } else {
            let mut text = field.text().to_string();
            if focused {
                text.insert(field.cursor(), '│');
            }
            Line::from(vec![
                Span::styled(format!("{} ", icons::SEARCH_ICON), palette.search(focused)),
                Span::raw(text),
            ])
        };

        let inner = if controller.outlined() {
            area
        } else {
            // underline style: text on the middle line, border below it
            Rect {
                y: area.y + 1,
                height: area.height.saturating_sub(1),
                ..area
            }
        };

        frame.render_widget(Paragraph::new(line).block(block), inner);
        hits.search = Some(area);
    }
}

impl Default for HeaderBar {
    fn default() -> Self {
        Self::new()
    }
}
