//! src/controller/events.rs
//! ============================================================================
//! # Outbound notifications
//!
//! The list never acts on user intent itself. Each intent becomes a
//! [`ListEvent`] handed to every registered [`ListObserver`]; only the direct
//! host hears about it, nothing propagates further.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::model::cookie::CookieItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// User asked to view one item's details.
    DetailsRequested { item: CookieItem },

    /// User asked to delete the current selection. Never empty.
    /// `indexes[i]` is the row `items[i]` was shown at, so hosts can tell
    /// identical records apart.
    DeleteRequested {
        indexes: Vec<usize>,
        items: Vec<CookieItem>,
    },

    /// User asked to export the current selection. Never empty.
    ExportRequested { items: Vec<CookieItem> },

    /// Fired on every keyword submission, repeated or not.
    SearchRequested { query: String },

    /// The selection set changed.
    SelectionChanged {
        indexes: Vec<usize>,
        items: Vec<CookieItem>,
    },
}

impl ListEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DetailsRequested { .. } => "details-requested",
            Self::DeleteRequested { .. } => "delete-requested",
            Self::ExportRequested { .. } => "export-requested",
            Self::SearchRequested { .. } => "search-requested",
            Self::SelectionChanged { .. } => "selection-changed",
        }
    }
}

/// Host-side callbacks. Every method defaults to a no-op so hosts implement
/// only what they care about.
pub trait ListObserver {
    fn on_details_requested(&mut self, _item: &CookieItem) {}

    fn on_delete_requested(&mut self, _items: &[CookieItem]) {}

    fn on_export_requested(&mut self, _items: &[CookieItem]) {}

    fn on_search_requested(&mut self, _query: &str) {}

    fn on_selection_changed(&mut self, _indexes: &[usize], _items: &[CookieItem]) {}

    /// Routes an event to the matching callback.
    fn notify(&mut self, event: &ListEvent) {
        match event {
            ListEvent::DetailsRequested { item } => self.on_details_requested(item),
            ListEvent::DeleteRequested { items, .. } => self.on_delete_requested(items),
            ListEvent::ExportRequested { items } => self.on_export_requested(items),
            ListEvent::SearchRequested { query } => self.on_search_requested(query),
            ListEvent::SelectionChanged { indexes, items } => {
                self.on_selection_changed(indexes, items)
            }
        }
    }
}

/// Forward events into the host's event loop.
impl ListObserver for mpsc::UnboundedSender<ListEvent> {
    fn notify(&mut self, event: &ListEvent) {
        if self.send(event.clone()).is_err() {
            warn!(event = event.name(), "ListObserver: receiver dropped");
        }
    }
}

#[derive(Default)]
pub struct EventEmitter {
    observers: Vec<Box<dyn ListObserver + Send>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl ListObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Convenience: a channel-backed observer plus its receiving end.
    pub fn channel(&mut self) -> mpsc::UnboundedReceiver<ListEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribe(tx);
        rx
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn emit(&mut self, event: ListEvent) {
        debug!(
            event = event.name(),
            observers = self.observers.len(),
            "EventEmitter: emit"
        );
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("observers", &self.observers.len())
            .finish()
    }
}
