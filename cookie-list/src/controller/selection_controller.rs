//! src/controller/selection_controller.rs
//! ============================================================================
//! # SelectionController: the cookie list component
//!
//! Owns the [`ListState`], the context menu, the search field and the event
//! boundary. Every user interaction arrives as an [`Action`] through
//! [`SelectionController::dispatch`]; hosts drive the same transitions through
//! the public methods (`set_items`, `clear_selection`, ...).
//!
//! All transitions are synchronous. Rendering reads the controller afterwards
//! (see [`CookieListRenderer`](crate::view::ui::CookieListRenderer)).

use tokio::sync::mpsc;
use tracing::{debug, instrument, trace};

use crate::{
    config::Config,
    controller::{
        actions::Action,
        events::{EventEmitter, ListEvent, ListObserver},
    },
    model::{
        cookie::CookieItem,
        list_state::ListState,
        list_type::ListType,
        menu_state::{MenuOption, MenuState},
        search_field::SearchField,
    },
};

/// Which part of the widget receives keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    List,
    Search,
    Menu,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    state: ListState,
    menu: MenuState,
    search: SearchField,
    focus: Focus,

    list_type: ListType,
    compatibility: bool,
    outlined: bool,

    emitter: EventEmitter,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let mut controller = Self::new();
        controller.list_type = config.list_type;
        controller.compatibility = config.compatibility;
        controller.outlined = config.outlined;
        controller
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    pub fn subscribe(&mut self, observer: impl ListObserver + Send + 'static) {
        self.emitter.subscribe(observer);
    }

    /// Channel receiving every outbound [`ListEvent`].
    pub fn events(&mut self) -> mpsc::UnboundedReceiver<ListEvent> {
        self.emitter.channel()
    }

    // ------------------------------------------------------------------
    // Host-facing surface
    // ------------------------------------------------------------------

    pub fn set_items(&mut self, items: Vec<CookieItem>) {
        let had_selection = self.state.has_selection();
        self.state.set_items(items);
        self.menu.close();
        if self.focus == Focus::Menu {
            self.focus = Focus::List;
        }
        if had_selection {
            self.emit_selection_changed();
        }
    }

    #[inline]
    pub fn items(&self) -> &[CookieItem] {
        self.state.items()
    }

    pub fn selected_items(&self) -> Vec<CookieItem> {
        self.state.selected_items()
    }

    pub fn selected_indexes(&self) -> Vec<usize> {
        self.state.selected_indexes()
    }

    #[inline]
    pub fn has_items(&self) -> bool {
        self.state.has_items()
    }

    #[inline]
    pub fn has_selection(&self) -> bool {
        self.state.has_selection()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn clear_selection(&mut self) {
        if self.state.clear_selection() {
            self.after_selection_change();
        }
    }

    #[inline]
    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn set_list_type(&mut self, list_type: ListType) {
        if self.list_type == list_type {
            return;
        }
        debug!(from = %self.list_type, to = %list_type, "SelectionController: list type");
        self.list_type = list_type;
        self.state.request_redraw();
        self.state.request_resize();
    }

    #[inline]
    pub fn compatibility(&self) -> bool {
        self.compatibility
    }

    pub fn set_compatibility(&mut self, value: bool) {
        self.compatibility = value;
        self.state.request_redraw();
    }

    #[inline]
    pub fn outlined(&self) -> bool {
        self.outlined
    }

    pub fn set_outlined(&mut self, value: bool) {
        self.outlined = value;
        self.state.request_redraw();
    }

    #[inline]
    pub fn keyword(&self) -> &str {
        self.state.keyword()
    }

    #[inline]
    pub fn state(&self) -> &ListState {
        &self.state
    }

    #[inline]
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    #[inline]
    pub fn search(&self) -> &SearchField {
        &self.search
    }

    #[inline]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    // ------------------------------------------------------------------
    // Selection operations
    // ------------------------------------------------------------------

    pub fn toggle_index(&mut self, index: usize) -> bool {
        let changed = self.state.toggle_index(index);
        if changed {
            self.after_selection_change();
        }
        changed
    }

    pub fn select_all(&mut self) -> bool {
        let changed = self.state.select_all();
        if changed {
            self.after_selection_change();
        }
        changed
    }

    pub fn deselect_all(&mut self) -> bool {
        let changed = self.state.deselect_all();
        if changed {
            self.after_selection_change();
        }
        changed
    }

    pub fn toggle_select_all(&mut self) -> bool {
        let changed = self.state.toggle_select_all();
        if changed {
            self.after_selection_change();
        }
        changed
    }

    /// Store the keyword and ask the host to search. Filtering is the host's
    /// job; it answers with `set_items`.
    pub fn set_keyword(&mut self, query: &str) {
        debug!(query, "SelectionController: search requested");
        self.state.set_keyword(query);
        self.emitter.emit(ListEvent::SearchRequested {
            query: query.to_string(),
        });
        self.clear_selection();
    }

    /// Ignored when `index` is out of range. Never touches the selection.
    pub fn request_details(&mut self, index: usize) -> bool {
        match self.state.item(index) {
            Some(item) => {
                let item = item.clone();
                self.emitter.emit(ListEvent::DetailsRequested { item });
                true
            }
            None => false,
        }
    }

    pub fn export_selected(&mut self) -> bool {
        self.close_menu();
        if !self.state.has_selection() {
            return false;
        }
        let items = self.state.selected_items();
        self.emitter.emit(ListEvent::ExportRequested { items });
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        self.close_menu();
        if !self.state.has_selection() {
            return false;
        }
        let indexes = self.state.selected_indexes();
        let items = self.state.selected_items();
        self.emitter
            .emit(ListEvent::DeleteRequested { indexes, items });
        true
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Apply one user action. Returns `false` for actions that had no effect.
    #[instrument(level = "trace", skip(self), fields(focus = ?self.focus))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        trace!("SelectionController: dispatch");
        match action {
            Action::TapRow(index) => {
                self.state.set_cursor(index);
                self.toggle_index(index)
            }
            Action::ToggleCheckbox(index) => self.toggle_index(index),
            Action::ToggleCursorRow => match self.state.cursor() {
                Some(index) => self.toggle_index(index),
                None => false,
            },
            Action::ToggleSelectAll => {
                self.toggle_select_all();
                true
            }
            Action::ClearSelection => {
                let had = self.state.has_selection();
                self.clear_selection();
                had
            }
            Action::RequestDetails(index) => self.request_details(index),
            Action::RequestCursorDetails => match self.state.cursor() {
                Some(index) => self.request_details(index),
                None => false,
            },

            Action::MoveCursorUp => self.move_cursor(ListState::cursor_up),
            Action::MoveCursorDown => self.move_cursor(ListState::cursor_down),
            Action::MoveCursorFirst => self.move_cursor(ListState::cursor_first),
            Action::MoveCursorLast => self.move_cursor(ListState::cursor_last),

            Action::FocusSearch => {
                self.close_menu();
                self.set_focus(Focus::Search);
                true
            }
            Action::BlurSearch => {
                self.set_focus(Focus::List);
                true
            }
            Action::SearchInput(ch) => {
                self.search.insert_char(ch);
                self.state.request_redraw();
                true
            }
            Action::SearchBackspace => {
                let changed = self.search.delete_char_before();
                self.state.request_redraw();
                changed
            }
            Action::SearchCursorLeft => {
                self.search.move_left();
                self.state.request_redraw();
                true
            }
            Action::SearchCursorRight => {
                self.search.move_right();
                self.state.request_redraw();
                true
            }
            Action::SearchClear => {
                self.search.clear();
                self.set_keyword("");
                true
            }
            Action::SubmitSearch => {
                let query = self.search.text().to_string();
                self.set_keyword(&query);
                true
            }

            Action::OpenMenu => self.open_menu(),
            Action::CloseMenu => {
                let was_open = self.menu.is_open();
                self.close_menu();
                was_open
            }
            Action::MenuNext => {
                self.menu.highlight_next();
                self.state.request_redraw();
                self.menu.is_open()
            }
            Action::MenuPrev => {
                self.menu.highlight_prev();
                self.state.request_redraw();
                self.menu.is_open()
            }
            Action::MenuActivate => match self.menu.highlighted() {
                Some(option) if self.menu.is_open() => self.activate(option),
                _ => false,
            },
            Action::MenuSelect(option) => {
                self.menu.highlight(option);
                self.activate(option)
            }
            Action::ExportSelected => self.export_selected(),
            Action::DeleteSelected => self.delete_selected(),

            Action::SetListType(list_type) => {
                self.set_list_type(list_type);
                true
            }
            Action::CycleListType => {
                self.set_list_type(self.list_type.next());
                true
            }

            Action::NoOp => false,
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn activate(&mut self, option: MenuOption) -> bool {
        match option {
            MenuOption::ExportSelected => self.export_selected(),
            MenuOption::DeleteSelected => self.delete_selected(),
        }
    }

    fn open_menu(&mut self) -> bool {
        if !self.state.has_selection() {
            return false;
        }
        self.menu.open();
        self.set_focus(Focus::Menu);
        self.state.request_redraw();
        true
    }

    fn close_menu(&mut self) {
        if self.menu.is_open() {
            self.menu.close();
            self.state.request_redraw();
        }
        if self.focus == Focus::Menu {
            self.focus = Focus::List;
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            trace!(?focus, "SelectionController: focus");
            self.focus = focus;
            self.state.request_redraw();
        }
    }

    fn move_cursor(&mut self, step: fn(&mut ListState)) -> bool {
        let before = self.state.cursor();
        step(&mut self.state);
        before != self.state.cursor()
    }

    fn after_selection_change(&mut self) {
        // The menu only exists while something is selected
        if !self.state.has_selection() {
            self.close_menu();
        }
        self.emit_selection_changed();
    }

    fn emit_selection_changed(&mut self) {
        let indexes = self.state.selected_indexes();
        let items = self.state.selected_items();
        self.emitter
            .emit(ListEvent::SelectionChanged { indexes, items });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookies(n: usize) -> Vec<CookieItem> {
        (0..n)
            .map(|i| CookieItem::new(format!("c{i}"), format!("v{i}"), "example.com", "/"))
            .collect()
    }

    fn controller(n: usize) -> (SelectionController, mpsc::UnboundedReceiver<ListEvent>) {
        let mut c = SelectionController::new();
        let rx = c.events();
        c.set_items(cookies(n));
        (c, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ListEvent>) -> Vec<ListEvent> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            out.push(event);
        }
        out
    }

    fn requests(events: Vec<ListEvent>) -> Vec<ListEvent> {
        events
            .into_iter()
            .filter(|e| !matches!(e, ListEvent::SelectionChanged { .. }))
            .collect()
    }

    #[test]
    fn test_tapping_two_rows() {
        let (mut c, _rx) = controller(5);
        c.dispatch(Action::TapRow(0));
        assert_eq!(c.selected_indexes(), vec![0]);
        c.dispatch(Action::TapRow(1));
        assert_eq!(c.selected_indexes(), vec![0, 1]);

        let items = c.items().to_vec();
        assert_eq!(c.selected_items(), vec![items[0].clone(), items[1].clone()]);
        assert_eq!(c.state().cursor(), Some(1));
    }

    #[test]
    fn test_checkbox_selects_one_item() {
        let (mut c, _rx) = controller(5);
        assert!(c.dispatch(Action::ToggleCheckbox(3)));
        assert_eq!(c.selected_items().len(), 1);
    }

    #[test]
    fn test_select_all_and_deselect_all_from_header() {
        let (mut c, mut rx) = controller(5);
        c.dispatch(Action::ToggleSelectAll);
        assert_eq!(c.selected_items().len(), 5);
        c.dispatch(Action::ToggleSelectAll);
        assert_eq!(c.selected_items().len(), 0);

        let changes = drain(&mut rx)
            .into_iter()
            .filter(|e| matches!(e, ListEvent::SelectionChanged { .. }))
            .count();
        assert_eq!(changes, 2);
    }

    #[test]
    fn test_details_does_not_change_selection() {
        let (mut c, mut rx) = controller(2);
        assert!(c.dispatch(Action::RequestDetails(1)));
        assert!(!c.has_selection());

        let item = c.items()[1].clone();
        assert_eq!(drain(&mut rx), vec![ListEvent::DetailsRequested { item }]);

        assert!(!c.dispatch(Action::RequestDetails(9)));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_export_emits_selected_items_once() {
        let (mut c, mut rx) = controller(2);
        c.dispatch(Action::TapRow(0));
        c.dispatch(Action::OpenMenu);
        assert!(c.menu().is_open());
        assert_eq!(c.focus(), Focus::Menu);
        drain(&mut rx);

        assert!(c.dispatch(Action::MenuSelect(MenuOption::ExportSelected)));
        let item = c.items()[0].clone();
        assert_eq!(
            requests(drain(&mut rx)),
            vec![ListEvent::ExportRequested { items: vec![item] }]
        );

        // menu closed, highlight reset, selection untouched
        assert!(!c.menu().is_open());
        assert_eq!(c.menu().highlighted(), None);
        assert_eq!(c.focus(), Focus::List);
        assert_eq!(c.selected_indexes(), vec![0]);
    }

    #[test]
    fn test_delete_through_keyboard_menu() {
        let (mut c, mut rx) = controller(3);
        c.dispatch(Action::TapRow(2));
        c.dispatch(Action::OpenMenu);
        c.dispatch(Action::MenuNext);
        assert_eq!(c.menu().highlighted(), Some(MenuOption::DeleteSelected));
        drain(&mut rx);

        assert!(c.dispatch(Action::MenuActivate));
        let item = c.items()[2].clone();
        assert_eq!(
            requests(drain(&mut rx)),
            vec![ListEvent::DeleteRequested {
                indexes: vec![2],
                items: vec![item]
            }]
        );
    }

    #[test]
    fn test_export_and_delete_need_a_selection() {
        let (mut c, mut rx) = controller(3);
        drain(&mut rx);
        assert!(!c.dispatch(Action::ExportSelected));
        assert!(!c.dispatch(Action::DeleteSelected));
        assert!(!c.dispatch(Action::OpenMenu));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_menu_closes_when_selection_empties() {
        let (mut c, _rx) = controller(3);
        c.dispatch(Action::TapRow(0));
        c.dispatch(Action::OpenMenu);
        c.toggle_index(0);
        assert!(!c.menu().is_open());
        assert_eq!(c.focus(), Focus::List);
    }

    #[test]
    fn test_search_submission_emits_and_clears_selection() {
        let (mut c, mut rx) = controller(3);
        c.dispatch(Action::TapRow(0));
        c.dispatch(Action::FocusSearch);
        for ch in "sid".chars() {
            c.dispatch(Action::SearchInput(ch));
        }
        drain(&mut rx);

        c.dispatch(Action::SubmitSearch);
        c.dispatch(Action::SubmitSearch);

        assert_eq!(c.keyword(), "sid");
        assert!(!c.has_selection());
        assert_eq!(
            requests(drain(&mut rx)),
            vec![
                ListEvent::SearchRequested { query: "sid".into() },
                ListEvent::SearchRequested { query: "sid".into() },
            ]
        );

        c.dispatch(Action::SearchClear);
        assert_eq!(c.keyword(), "");
        assert!(c.search().is_empty());
        assert_eq!(
            drain(&mut rx),
            vec![ListEvent::SearchRequested { query: String::new() }]
        );
    }

    #[test]
    fn test_list_type_leaves_selection_alone() {
        let (mut c, _rx) = controller(4);
        c.dispatch(Action::TapRow(1));
        c.dispatch(Action::TapRow(3));
        let before = c.selected_indexes();

        for list_type in ListType::ALL {
            c.dispatch(Action::SetListType(list_type));
            assert_eq!(c.list_type(), list_type);
            assert_eq!(c.selected_indexes(), before);
        }
        c.dispatch(Action::CycleListType);
        assert_eq!(c.selected_indexes(), before);
    }

    #[test]
    fn test_set_items_drops_selection_and_menu() {
        let (mut c, mut rx) = controller(4);
        c.dispatch(Action::TapRow(1));
        c.dispatch(Action::OpenMenu);
        drain(&mut rx);

        c.set_items(cookies(2));
        assert!(!c.has_selection());
        assert!(!c.menu().is_open());
        assert_eq!(
            drain(&mut rx),
            vec![ListEvent::SelectionChanged {
                indexes: vec![],
                items: vec![]
            }]
        );
    }

    #[test]
    fn test_clear_selection_unchecks_header() {
        let (mut c, _rx) = controller(4);
        c.dispatch(Action::ToggleSelectAll);
        c.clear_selection();
        assert!(!c.has_selection());
        assert!(!c.state().all_selected());

        // next header tap selects everything again
        c.dispatch(Action::ToggleSelectAll);
        assert_eq!(c.selected_indexes(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_from_config_copies_presentation_flags() {
        let config = Config {
            list_type: ListType::Compact,
            outlined: true,
            compatibility: true,
            ..Config::default()
        };
        let c = SelectionController::from_config(&config);
        assert_eq!(c.list_type(), ListType::Compact);
        assert!(c.outlined());
        assert!(c.compatibility());
    }
}
