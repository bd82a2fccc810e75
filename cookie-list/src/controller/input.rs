//! src/controller/input.rs
//! Terminal input -> [`Action`], depending on which part of the list has focus.
//!
//! `None` means the key is not ours and the host may use it.

use std::collections::HashMap;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::trace;

use crate::{
    controller::{actions::Action, selection_controller::Focus},
    view::hit_map::{HitMap, HitTarget},
};

pub struct InputMapper {
    list_bindings: HashMap<KeyEvent, Action>,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMapper {
    pub fn new() -> Self {
        let mut list_bindings = HashMap::with_capacity(20);

        list_bindings.insert(plain(KeyCode::Up), Action::MoveCursorUp);
        list_bindings.insert(key('k'), Action::MoveCursorUp);
        list_bindings.insert(plain(KeyCode::Down), Action::MoveCursorDown);
        list_bindings.insert(key('j'), Action::MoveCursorDown);
        list_bindings.insert(plain(KeyCode::Home), Action::MoveCursorFirst);
        list_bindings.insert(plain(KeyCode::End), Action::MoveCursorLast);
        list_bindings.insert(key(' '), Action::ToggleCursorRow);
        list_bindings.insert(plain(KeyCode::Enter), Action::ToggleCursorRow);
        list_bindings.insert(key('a'), Action::ToggleSelectAll);
        list_bindings.insert(key('d'), Action::RequestCursorDetails);
        list_bindings.insert(key('m'), Action::OpenMenu);
        list_bindings.insert(key('e'), Action::ExportSelected);
        list_bindings.insert(plain(KeyCode::Delete), Action::DeleteSelected);
        list_bindings.insert(key('/'), Action::FocusSearch);
        list_bindings.insert(plain(KeyCode::Esc), Action::ClearSelection);
        list_bindings.insert(key('l'), Action::CycleListType);

        Self { list_bindings }
    }

    pub fn map_key(&self, focus: Focus, event: KeyEvent) -> Option<Action> {
        if event.kind != KeyEventKind::Press {
            return Some(Action::NoOp);
        }
        let event = normalize(event);
        trace!(?focus, code = ?event.code, "InputMapper: key");

        match focus {
            Focus::List => self.list_bindings.get(&event).cloned(),
            Focus::Search => Some(search_key(event)),
            Focus::Menu => Some(menu_key(event)),
        }
    }

    pub fn map_mouse(&self, focus: Focus, hits: &HitMap, event: MouseEvent) -> Option<Action> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = hits.hit(event.column, event.row);
                trace!(?target, "InputMapper: click");
                Some(click(focus, target))
            }
            MouseEventKind::ScrollUp if focus == Focus::List => Some(Action::MoveCursorUp),
            MouseEventKind::ScrollDown if focus == Focus::List => Some(Action::MoveCursorDown),
            _ => None,
        }
    }
}

fn click(focus: Focus, target: HitTarget) -> Action {
    // Any click outside an open menu just dismisses it
    if focus == Focus::Menu {
        return match target {
            HitTarget::MenuOption(option) => Action::MenuSelect(option),
            _ => Action::CloseMenu,
        };
    }

    match target {
        HitTarget::SelectAll => Action::ToggleSelectAll,
        HitTarget::MenuTrigger => Action::OpenMenu,
        HitTarget::Search => Action::FocusSearch,
        HitTarget::MenuOption(option) => Action::MenuSelect(option),
        HitTarget::Checkbox(index) => Action::ToggleCheckbox(index),
        HitTarget::Details(index) => Action::RequestDetails(index),
        HitTarget::Row(index) => Action::TapRow(index),
        HitTarget::Outside if focus == Focus::Search => Action::BlurSearch,
        HitTarget::Outside => Action::NoOp,
    }
}

fn search_key(event: KeyEvent) -> Action {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('u') if ctrl => Action::SearchClear,
        KeyCode::Char(_) if ctrl => Action::NoOp,
        KeyCode::Char(ch) => Action::SearchInput(ch),
        KeyCode::Backspace => Action::SearchBackspace,
        KeyCode::Left => Action::SearchCursorLeft,
        KeyCode::Right => Action::SearchCursorRight,
        KeyCode::Enter => Action::SubmitSearch,
        KeyCode::Esc | KeyCode::Tab => Action::BlurSearch,
        _ => Action::NoOp,
    }
}

fn menu_key(event: KeyEvent) -> Action {
    match event.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Action::MenuPrev,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Action::MenuNext,
        KeyCode::Enter | KeyCode::Char(' ') => Action::MenuActivate,
        KeyCode::Esc | KeyCode::Char('m') => Action::CloseMenu,
        _ => Action::NoOp,
    }
}

// Uppercase chars arrive with SHIFT on some terminals and without on others
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

fn key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
