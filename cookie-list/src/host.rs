//! src/host.rs
//! ============================================================================
//! # CookieStore: the demo host's side of the list
//!
//! The list only ever holds the filtered view. The store owns every cookie,
//! remembers which store slot each visible row came from, and answers the
//! list's requests by mutating itself and handing a fresh view back through
//! [`SelectionController::set_items`].

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::{
    controller::{events::ListEvent, selection_controller::SelectionController},
    error::AppError,
    model::cookie::CookieItem,
};

#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    cookies: Vec<CookieItem>,
    // store slot of every row currently shown by the list
    visible: Vec<usize>,
}

impl CookieStore {
    pub fn new(cookies: Vec<CookieItem>) -> Self {
        Self {
            cookies,
            visible: Vec::new(),
        }
    }

    #[inline]
    pub fn cookies(&self) -> &[CookieItem] {
        &self.cookies
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Re-applies the list's keyword and hands the matching cookies over.
    /// Returns how many rows are shown.
    pub fn refilter(&mut self, controller: &mut SelectionController) -> usize {
        let keyword = controller.keyword().to_owned();
        let (visible, rows): (Vec<usize>, Vec<CookieItem>) = self
            .cookies
            .iter()
            .enumerate()
            .filter(|(_, cookie)| cookie.matches(&keyword))
            .map(|(slot, cookie)| (slot, cookie.clone()))
            .unzip();

        debug!(
            keyword = %keyword,
            shown = rows.len(),
            total = self.cookies.len(),
            "CookieStore: refilter"
        );
        self.visible = visible;
        controller.set_items(rows);
        self.visible.len()
    }

    pub fn extend(&mut self, fresh: Vec<CookieItem>, controller: &mut SelectionController) {
        self.cookies.extend(fresh);
        self.refilter(controller);
    }

    pub fn clear(&mut self, controller: &mut SelectionController) {
        self.cookies.clear();
        self.refilter(controller);
    }

    /// Removes the rows at `indexes`. A row is only removed while it still
    /// shows the matching entry of `items`; stale requests are skipped.
    pub fn delete(
        &mut self,
        indexes: &[usize],
        items: &[CookieItem],
        controller: &mut SelectionController,
    ) -> usize {
        let mut doomed: Vec<usize> = indexes
            .iter()
            .zip(items)
            .filter_map(|(&row, item)| {
                let slot = *self.visible.get(row)?;
                (self.cookies.get(slot) == Some(item)).then_some(slot)
            })
            .collect();
        doomed.sort_unstable();
        doomed.dedup();

        for slot in doomed.iter().rev() {
            self.cookies.remove(*slot);
        }
        info!(removed = doomed.len(), "CookieStore: deleted");
        self.refilter(controller);
        doomed.len()
    }

    /// Handles the requests that only touch the store. Returns a notice for
    /// the status line; `None` for events the caller handles itself.
    pub fn apply(
        &mut self,
        event: &ListEvent,
        controller: &mut SelectionController,
    ) -> Option<String> {
        match event {
            ListEvent::DeleteRequested { indexes, items } => {
                let removed = self.delete(indexes, items, controller);
                Some(format!("Deleted {removed} cookie(s)"))
            }
            ListEvent::SearchRequested { query } => {
                let shown = self.refilter(controller);
                if query.trim().is_empty() {
                    Some(format!("Showing all {shown} cookies"))
                } else {
                    Some(format!("{shown} cookie(s) match \"{query}\""))
                }
            }
            _ => None,
        }
    }
}

/// Writes `items` as a pretty JSON array to a timestamped file in `dir`.
pub async fn export_cookies(dir: &Path, items: &[CookieItem]) -> Result<PathBuf, AppError> {
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(format!(
        "cookies-{}.json",
        Local::now().format("%Y%m%d-%H%M%S")
    ));
    let json = serde_json::to_string_pretty(items)?;
    tokio::fs::write(&path, json).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{controller::actions::Action, util::data_generator::load_cookies};
    use tokio::sync::mpsc;

    fn cookie(name: &str) -> CookieItem {
        CookieItem::new(name, "v", "example.com", "/")
    }

    fn names(items: &[CookieItem]) -> Vec<&str> {
        items.iter().map(|c| c.name.as_str()).collect()
    }

    fn setup(
        cookies: Vec<CookieItem>,
    ) -> (
        CookieStore,
        SelectionController,
        mpsc::UnboundedReceiver<ListEvent>,
    ) {
        let mut controller = SelectionController::new();
        let rx = controller.events();
        let mut store = CookieStore::new(cookies);
        store.refilter(&mut controller);
        (store, controller, rx)
    }

    fn last_request(rx: &mut mpsc::UnboundedReceiver<ListEvent>) -> ListEvent {
        let mut found = None;
        while let Ok(event) = rx.try_recv() {
            if !matches!(event, ListEvent::SelectionChanged { .. }) {
                found = Some(event);
            }
        }
        found.unwrap()
    }

    #[test]
    fn test_search_request_shows_only_matches() {
        let (mut store, mut c, mut rx) = setup(vec![
            cookie("xray"),
            cookie("alpha"),
            cookie("box"),
            cookie("beta"),
        ]);

        c.set_keyword("x");
        let event = last_request(&mut rx);
        let notice = store.apply(&event, &mut c).unwrap();

        assert_eq!(names(c.items()), vec!["xray", "box"]);
        assert_eq!(store.len(), 4);
        assert_eq!(notice, "2 cookie(s) match \"x\"");

        c.set_keyword("");
        let event = last_request(&mut rx);
        store.apply(&event, &mut c);
        assert_eq!(c.items().len(), 4);
    }

    #[test]
    fn test_delete_removes_requested_rows_and_keeps_filter() {
        let (mut store, mut c, mut rx) = setup(vec![
            cookie("alpha"),
            cookie("beta"),
            cookie("alpine"),
            cookie("gamma"),
        ]);
        c.set_keyword("al");
        let event = last_request(&mut rx);
        store.apply(&event, &mut c);
        assert_eq!(names(c.items()), vec!["alpha", "alpine"]);

        c.dispatch(Action::TapRow(1));
        c.dispatch(Action::DeleteSelected);
        let event = last_request(&mut rx);
        assert_eq!(store.apply(&event, &mut c).unwrap(), "Deleted 1 cookie(s)");

        assert_eq!(names(store.cookies()), vec!["alpha", "beta", "gamma"]);
        assert_eq!(names(c.items()), vec!["alpha"]);
        assert!(!c.has_selection());
    }

    #[test]
    fn test_delete_keeps_identical_records_that_were_not_selected() {
        let (mut store, mut c, mut rx) = setup(vec![cookie("dup"), cookie("dup"), cookie("dup")]);

        c.dispatch(Action::TapRow(1));
        c.dispatch(Action::DeleteSelected);
        let event = last_request(&mut rx);
        store.apply(&event, &mut c);

        assert_eq!(store.len(), 2);
        assert_eq!(c.items().len(), 2);
    }

    #[test]
    fn test_stale_delete_is_skipped() {
        let (mut store, mut c, _rx) = setup(vec![cookie("a"), cookie("b")]);

        // row 0 now shows "a", not "b"
        assert_eq!(store.delete(&[0], &[cookie("b")], &mut c), 0);
        assert_eq!(store.delete(&[7], &[cookie("a")], &mut c), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_extend_reapplies_filter() {
        let (mut store, mut c, mut rx) = setup(vec![cookie("session"), cookie("theme")]);
        c.set_keyword("sess");
        let event = last_request(&mut rx);
        store.apply(&event, &mut c);
        assert_eq!(c.items().len(), 1);

        store.extend(vec![cookie("session2"), cookie("lang")], &mut c);
        assert_eq!(store.len(), 4);
        assert_eq!(names(c.items()), vec!["session", "session2"]);

        store.clear(&mut c);
        assert!(store.is_empty());
        assert!(c.is_empty());
    }

    #[test]
    fn test_details_and_export_are_left_to_the_caller() {
        let (mut store, mut c, _rx) = setup(vec![cookie("a")]);
        let details = ListEvent::DetailsRequested { item: cookie("a") };
        assert_eq!(store.apply(&details, &mut c), None);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_export_writes_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let items = vec![cookie("a"), cookie("b")];

        let path = export_cookies(&dir.path().join("out"), &items).await.unwrap();
        assert!(
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("cookies-")
        );
        assert_eq!(load_cookies(&path).unwrap(), items);
    }
}
