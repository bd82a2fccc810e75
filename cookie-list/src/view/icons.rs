//! src/view/icons.rs
//! Glyphs used by the list.

pub const CHECKBOX_ON: &str = "[x]";
pub const CHECKBOX_OFF: &str = "[ ]";
pub const MORE_VERT: &str = "⋮";
pub const EXPORT_ICON: &str = "⇪";
pub const DELETE_ICON: &str = "✗";
pub const SEARCH_ICON: &str = "⌕";
pub const DETAILS_LABEL: &str = "Details";

#[inline]
pub const fn checkbox(checked: bool) -> &'static str {
    if checked { CHECKBOX_ON } else { CHECKBOX_OFF }
}
