//! src/model/cookie.rs
//! ============================================================================
//! # CookieItem: one browser cookie record as supplied by the host
//!
//! The list never mutates these. Hosts hand over a fresh collection through
//! [`SelectionController::set_items`](crate::controller::SelectionController::set_items)
//! and receive clones back in outbound events.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CookieItem {
    pub name: CompactString,
    pub value: CompactString,
    pub domain: CompactString,
    pub path: CompactString,
}

impl CookieItem {
    pub fn new(
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
        domain: impl Into<CompactString>,
        path: impl Into<CompactString>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
        }
    }

    /// Case-insensitive match against name, value, domain and path.
    ///
    /// The widget itself never filters; this exists for hosts that answer
    /// search requests locally.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [&self.name, &self.value, &self.domain, &self.path]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// `domain path` line shown under the name.
    pub fn location(&self) -> String {
        format!("{} {}", self.domain, self.path)
    }
}
