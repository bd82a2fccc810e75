//! src/view/ui.rs
//! ============================================================
//! Render-from-state for the cookie list.
//!
//! Hosts call [`CookieListRenderer::render`] after each batch of state
//! mutations (or every frame; it always paints the full widget). The renderer
//! owns only presentation leftovers: the scroll offset, the hit map of the
//! last paint and frame counters.

use std::time::{Duration, Instant};

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, ListState as TuiListState},
};
use tracing::{instrument, trace};

use crate::{
    controller::selection_controller::SelectionController,
    view::{
        components::{
            context_menu::ContextMenu,
            cookie_rows::{CookieRows, visible_rows},
            empty_info::EmptyInfo,
            header_bar::{HEADER_HEIGHT, HeaderBar},
        },
        hit_map::HitMap,
        theme::Palette,
    },
};

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub resizes: u64,
    pub slow: u64,
    pub total: Duration,
}

#[derive(Debug, Default)]
pub struct CookieListRenderer {
    tui_state: TuiListState,
    hits: HitMap,
    stats: RenderStats,
}

impl CookieListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the controller changed since the last paint.
    #[inline]
    pub fn needs_paint(&self, controller: &SelectionController) -> bool {
        self.stats.frames == 0 || controller.state().needs_redraw()
    }

    /// Regions from the last paint, for mouse mapping.
    #[inline]
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    #[inline]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.tui_state.offset()
    }

    #[instrument(level = "trace", skip_all, fields(frame = self.stats.frames))]
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect, controller: &SelectionController) {
        let start = Instant::now();
        let state = controller.state();
        let palette = Palette::for_mode(controller.compatibility());
        let dirty = state.take_redraw();
        trace!(dirty, "CookieListRenderer: paint");

        self.hits.clear();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Cookies ({}) ", state.len()))
            .title_style(Style::default().fg(palette.accent).bold())
            .border_style(palette.border())
            .style(palette.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header, body] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)]).areas(inner);

        if state.take_pending_resize() {
            self.flush_resize(controller, body);
        }

        HeaderBar::new().render(frame, controller, &palette, header, &mut self.hits);

        if state.has_items() {
            CookieRows::new().render(
                frame,
                controller,
                &palette,
                body,
                &mut self.tui_state,
                &mut self.hits,
            );
        } else {
            EmptyInfo::new().render(frame, &palette, body);
        }

        if controller.menu().is_open()
            && let Some(trigger) = self.hits.menu_trigger
        {
            let popup = ContextMenu::popup_area(trigger, inner);
            ContextMenu::new().render(frame, controller.menu(), &palette, popup, &mut self.hits);
        }

        let elapsed = start.elapsed();
        self.stats.total += elapsed;
        if elapsed.as_millis() > 16 {
            self.stats.slow += 1;
        }
        self.stats.frames += 1;
    }

    /// Bulk selection / density changes land here once per paint: the
    /// viewport is re-measured and the offset pulled back into range.
    fn flush_resize(&mut self, controller: &SelectionController, body: Rect) {
        let visible = visible_rows(body.height, controller.list_type()).max(1);
        let max_offset = controller.state().len().saturating_sub(visible);
        let offset = self.tui_state.offset().min(max_offset);
        *self.tui_state.offset_mut() = offset;
        self.stats.resizes += 1;
        trace!(visible, offset, "CookieListRenderer: resize flushed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        controller::{actions::Action, input::InputMapper, selection_controller::Focus},
        model::{cookie::CookieItem, list_type::ListType},
        view::hit_map::HitTarget,
    };
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    fn cookies(n: usize) -> Vec<CookieItem> {
        (0..n)
            .map(|i| CookieItem::new(format!("cookie{i}"), format!("value{i}"), "example.com", "/"))
            .collect()
    }

    fn paint(
        renderer: &mut CookieListRenderer,
        controller: &SelectionController,
        width: u16,
        height: u16,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| renderer.render(f, f.area(), controller))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_list_renders_message_without_counter() {
        let controller = SelectionController::new();
        let mut renderer = CookieListRenderer::new();
        let screen = paint(&mut renderer, &controller, 80, 12);

        assert!(screen.contains("The cookies list is empty."));
        assert!(!screen.contains("selected"));
        assert!(!controller.has_selection());
        assert!(renderer.hits().rows.is_empty());
        assert!(renderer.hits().menu_trigger.is_none());
    }

    #[test]
    fn test_counter_follows_selection() {
        let mut controller = SelectionController::new();
        controller.set_items(cookies(5));
        controller.dispatch(Action::TapRow(0));
        controller.dispatch(Action::TapRow(1));

        let mut renderer = CookieListRenderer::new();
        let screen = paint(&mut renderer, &controller, 80, 20);

        assert!(screen.contains("2 item(s) selected"));
        assert!(screen.contains("cookie0: value0"));
        assert!(screen.contains("example.com /"));
        assert!(!screen.contains("The cookies list is empty."));
        assert!(renderer.hits().menu_trigger.is_some());
    }

    #[test]
    fn test_click_on_painted_row_selects_it() {
        let mut controller = SelectionController::new();
        controller.set_items(cookies(5));
        let mut renderer = CookieListRenderer::new();
        paint(&mut renderer, &controller, 80, 20);

        let second = renderer.hits().rows[1];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: second.row.x + 10,
            row: second.row.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        let action = InputMapper::new()
            .map_mouse(controller.focus(), renderer.hits(), click)
            .unwrap();
        assert_eq!(action, Action::TapRow(1));

        controller.dispatch(action);
        assert_eq!(controller.selected_indexes(), vec![1]);
    }

    #[test]
    fn test_menu_popup_painted_over_list() {
        let mut controller = SelectionController::new();
        controller.set_items(cookies(3));
        controller.dispatch(Action::TapRow(0));
        let mut renderer = CookieListRenderer::new();
        paint(&mut renderer, &controller, 80, 20);

        controller.dispatch(Action::OpenMenu);
        assert_eq!(controller.focus(), Focus::Menu);
        let screen = paint(&mut renderer, &controller, 80, 20);

        assert!(screen.contains("Export selected"));
        assert!(screen.contains("Delete selected"));
        let (_, export) = renderer.hits().menu_options[0];
        assert_eq!(
            renderer.hits().hit(export.x + 1, export.y),
            HitTarget::MenuOption(crate::model::menu_state::MenuOption::ExportSelected)
        );
    }

    #[test]
    fn test_density_changes_visible_rows_only() {
        let mut controller = SelectionController::new();
        controller.set_items(cookies(30));
        controller.dispatch(Action::TapRow(2));
        let mut renderer = CookieListRenderer::new();

        let mut counts = Vec::new();
        for list_type in ListType::ALL {
            controller.set_list_type(list_type);
            let screen = paint(&mut renderer, &controller, 80, 20);
            counts.push(renderer.hits().rows.len());
            assert!(screen.contains("1 item(s) selected"));
            assert_eq!(controller.selected_indexes(), vec![2]);
        }
        assert!(counts[0] < counts[1]);
        assert!(counts[1] < counts[2]);
    }

    #[test]
    fn test_resize_flush_clamps_offset() {
        let mut controller = SelectionController::new();
        controller.set_items(cookies(40));
        controller.dispatch(Action::MoveCursorLast);
        let mut renderer = CookieListRenderer::new();
        paint(&mut renderer, &controller, 80, 20);
        assert!(renderer.scroll_offset() > 0);

        controller.set_items(cookies(2));
        paint(&mut renderer, &controller, 80, 20);
        assert_eq!(renderer.scroll_offset(), 0);
        assert!(renderer.stats().resizes >= 2);
    }

    #[test]
    fn test_needs_paint_tracks_mutations() {
        let mut controller = SelectionController::new();
        controller.set_items(cookies(3));
        let mut renderer = CookieListRenderer::new();
        assert!(renderer.needs_paint(&controller));

        paint(&mut renderer, &controller, 60, 12);
        assert!(!renderer.needs_paint(&controller));

        controller.dispatch(Action::ToggleCheckbox(0));
        assert!(renderer.needs_paint(&controller));
    }

    #[test]
    fn test_outlined_search_draws_title() {
        let mut controller = SelectionController::new();
        let mut renderer = CookieListRenderer::new();
        let plain = paint(&mut renderer, &controller, 80, 10);
        assert!(!plain.contains("┌ Search "));

        controller.set_outlined(true);
        let outlined = paint(&mut renderer, &controller, 80, 10);
        assert!(outlined.contains("┌ Search "));
    }
}
