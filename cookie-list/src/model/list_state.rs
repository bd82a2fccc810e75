//! src/model/list_state.rs
//! ============================================================================
//! # ListState: item collection, index selection and search keyword
//!
//! Derived values (`has_items`, `has_selection`, `selected_items`) are always
//! recomputed from `items` + `selected`; nothing derived is stored.
//!
//! Redraw bookkeeping is lock-free: mutations raise an atomic dirty flag and
//! the renderer drains it once per frame. ratatui repaints the whole frame on
//! every draw, so one flag is all the host needs to decide whether to draw.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use compact_str::CompactString;
use tracing::{debug, trace};

use crate::model::cookie::CookieItem;

#[derive(Debug)]
pub struct ListState {
    items: Vec<CookieItem>,
    selected: BTreeSet<usize>,
    keyword: CompactString,

    // Header checkbox. Tracks the user's last select-all tap, not whether
    // every row happens to be selected.
    all_selected: bool,

    // Keyboard focus row
    cursor: Option<usize>,

    dirty: AtomicBool,
    pending_resize: AtomicBool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: BTreeSet::new(),
            keyword: CompactString::const_new(""),
            all_selected: false,
            cursor: None,
            dirty: AtomicBool::new(true),
            pending_resize: AtomicBool::new(false),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_items(items: Vec<CookieItem>) -> Self {
        let mut state = Self::new();
        state.set_items(items);
        state
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// Replace the collection. Selection never survives a replacement.
    pub fn set_items(&mut self, items: Vec<CookieItem>) {
        debug!(count = items.len(), "ListState: replacing items");
        self.items = items;
        self.selected.clear();
        self.all_selected = false;
        self.cursor = match self.cursor {
            _ if self.items.is_empty() => None,
            Some(c) => Some(c.min(self.items.len() - 1)),
            None => Some(0),
        };
        self.request_redraw();
        self.request_resize();
    }

    #[inline]
    pub fn items(&self) -> &[CookieItem] {
        &self.items
    }

    #[inline]
    pub fn item(&self, index: usize) -> Option<&CookieItem> {
        self.items.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    #[inline]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    #[inline]
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    #[inline]
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Ascending.
    pub fn selected_indexes(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Selected items in ascending index order.
    pub fn selected_items(&self) -> Vec<CookieItem> {
        self.selected
            .iter()
            .filter_map(|&i| self.items.get(i).cloned())
            .collect()
    }

    /// Flip membership of `index`. Out-of-range indexes are ignored.
    pub fn toggle_index(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            trace!(index, len = self.items.len(), "ListState: toggle out of range");
            return false;
        }

        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        self.request_redraw();
        true
    }

    /// Select every row. Returns whether the selection changed.
    pub fn select_all(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }

        let before = self.selected.len();
        self.selected.extend(0..self.items.len());
        self.request_redraw();
        self.request_resize();
        self.selected.len() != before
    }

    /// Returns whether the selection changed.
    pub fn deselect_all(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }

        self.selected.clear();
        self.request_redraw();
        self.request_resize();
        true
    }

    /// Header checkbox tap: flip it, then select or deselect everything.
    pub fn toggle_select_all(&mut self) -> bool {
        self.all_selected = !self.all_selected;
        self.request_redraw();

        if self.all_selected {
            self.select_all()
        } else {
            self.deselect_all()
        }
    }

    /// Drop the selection and uncheck the header checkbox.
    pub fn clear_selection(&mut self) -> bool {
        self.all_selected = false;
        self.request_redraw();
        self.deselect_all()
    }

    // ------------------------------------------------------------------
    // Keyword
    // ------------------------------------------------------------------

    #[inline]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: impl Into<CompactString>) {
        self.keyword = keyword.into();
        self.request_redraw();
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.items.len() && self.cursor != Some(index) {
            self.cursor = Some(index);
            self.request_redraw();
        }
    }

    pub fn cursor_up(&mut self) {
        if let Some(c) = self.cursor {
            self.set_cursor(c.saturating_sub(1));
        }
    }

    pub fn cursor_down(&mut self) {
        match self.cursor {
            Some(c) => self.set_cursor(c + 1),
            None => self.set_cursor(0),
        }
    }

    pub fn cursor_first(&mut self) {
        self.set_cursor(0);
    }

    pub fn cursor_last(&mut self) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.set_cursor(last);
        }
    }

    // ------------------------------------------------------------------
    // Redraw / resize flags
    // ------------------------------------------------------------------

    #[inline]
    pub fn request_redraw(&self) {
        self.dirty.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }

    /// Whether a redraw was pending; clears it.
    #[inline]
    pub fn take_redraw(&self) -> bool {
        self.dirty.swap(false, Ordering::Relaxed)
    }

    /// Deferred to the next paint so bulk changes resize once.
    #[inline]
    pub fn request_resize(&self) {
        self.pending_resize.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn take_pending_resize(&self) -> bool {
        self.pending_resize.swap(false, Ordering::Relaxed)
    }
}
