//! src/view/hit_map.rs
//! Clickable regions recorded by the last paint, consumed by mouse mapping.

use ratatui::layout::{Position, Rect};

use crate::model::menu_state::MenuOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRegions {
    pub index: usize,
    pub row: Rect,
    pub checkbox: Rect,
    pub details: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    SelectAll,
    MenuTrigger,
    Search,
    MenuOption(MenuOption),
    Checkbox(usize),
    Details(usize),
    Row(usize),
    Outside,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub select_all: Option<Rect>,
    pub menu_trigger: Option<Rect>,
    pub search: Option<Rect>,
    pub menu_popup: Option<Rect>,
    pub menu_options: Vec<(MenuOption, Rect)>,
    pub rows: Vec<RowRegions>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.select_all = None;
        self.menu_trigger = None;
        self.search = None;
        self.menu_popup = None;
        self.menu_options.clear();
        self.rows.clear();
    }

    /// Popup first, since it is painted over the list.
    pub fn hit(&self, column: u16, row: u16) -> HitTarget {
        let pos = Position::new(column, row);
        let inside = |r: &Option<Rect>| r.is_some_and(|r| r.contains(pos));

        if let Some((option, _)) = self.menu_options.iter().find(|(_, r)| r.contains(pos)) {
            return HitTarget::MenuOption(*option);
        }
        if inside(&self.menu_popup) {
            // border of the popup
            return HitTarget::Outside;
        }
        if inside(&self.select_all) {
            return HitTarget::SelectAll;
        }
        if inside(&self.menu_trigger) {
            return HitTarget::MenuTrigger;
        }
        if inside(&self.search) {
            return HitTarget::Search;
        }

        for regions in &self.rows {
            if regions.checkbox.contains(pos) {
                return HitTarget::Checkbox(regions.index);
            }
            if regions.details.contains(pos) {
                return HitTarget::Details(regions.index);
            }
            if regions.row.contains(pos) {
                return HitTarget::Row(regions.index);
            }
        }
        HitTarget::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_parts_resolve_to_their_target() {
        let map = HitMap {
            rows: vec![RowRegions {
                index: 4,
                row: Rect::new(0, 5, 40, 2),
                checkbox: Rect::new(0, 5, 5, 1),
                details: Rect::new(30, 5, 10, 1),
            }],
            ..HitMap::default()
        };

        assert_eq!(map.hit(1, 5), HitTarget::Checkbox(4));
        assert_eq!(map.hit(32, 5), HitTarget::Details(4));
        assert_eq!(map.hit(12, 6), HitTarget::Row(4));
        assert_eq!(map.hit(12, 7), HitTarget::Outside);
    }

    #[test]
    fn test_menu_popup_covers_rows() {
        let mut map = HitMap {
            menu_popup: Some(Rect::new(10, 1, 20, 4)),
            menu_options: vec![(MenuOption::DeleteSelected, Rect::new(11, 3, 18, 1))],
            rows: vec![RowRegions {
                index: 0,
                row: Rect::new(0, 2, 40, 3),
                checkbox: Rect::new(0, 2, 6, 1),
                details: Rect::new(30, 2, 10, 1),
            }],
            ..HitMap::default()
        };

        assert_eq!(
            map.hit(15, 3),
            HitTarget::MenuOption(MenuOption::DeleteSelected)
        );
        assert_eq!(map.hit(10, 2), HitTarget::Outside);
        assert_eq!(map.hit(2, 2), HitTarget::Checkbox(0));

        map.clear();
        assert_eq!(map.hit(15, 3), HitTarget::Outside);
    }
}
