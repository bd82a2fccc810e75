//! src/controller/actions.rs
//! ============================================================================
//! # Actions: user intents understood by the cookie list
//!
//! Raw terminal input is mapped to an `Action` by
//! [`InputMapper`](crate::controller::input::InputMapper); the
//! [`SelectionController`](crate::controller::SelectionController) applies it.

use crate::model::{list_type::ListType, menu_state::MenuOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Row tap (click on the row body). Toggles the row and moves the cursor.
    TapRow(usize),

    /// Click on a row's checkbox glyph.
    ToggleCheckbox(usize),

    /// Space/Enter on the cursor row.
    ToggleCursorRow,

    /// Header "select / deselect all" checkbox.
    ToggleSelectAll,

    ClearSelection,

    /// "Details" button of a row.
    RequestDetails(usize),

    RequestCursorDetails,

    MoveCursorUp,

    MoveCursorDown,

    MoveCursorFirst,

    MoveCursorLast,

    // Search field
    FocusSearch,

    BlurSearch,

    SearchInput(char),

    SearchBackspace,

    SearchCursorLeft,

    SearchCursorRight,

    /// Clear the field and submit the empty query.
    SearchClear,

    /// Submit the field text as the new keyword.
    SubmitSearch,

    // Context menu
    OpenMenu,

    CloseMenu,

    MenuNext,

    MenuPrev,

    /// Activate the highlighted option.
    MenuActivate,

    /// Activate a specific option (mouse).
    MenuSelect(MenuOption),

    ExportSelected,

    DeleteSelected,

    // Presentation
    SetListType(ListType),

    CycleListType,

    /// Event consumed, nothing to do.
    NoOp,
}
