//! src/model/menu_state.rs
//! Context menu shown next to the selection counter.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    ExportSelected,
    DeleteSelected,
}

impl MenuOption {
    /// Display order.
    pub const ALL: [MenuOption; 2] = [Self::ExportSelected, Self::DeleteSelected];

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExportSelected => "Export selected",
            Self::DeleteSelected => "Delete selected",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    highlighted: Option<MenuOption>,
}

impl MenuState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn highlighted(&self) -> Option<MenuOption> {
        self.highlighted
    }

    pub fn open(&mut self) {
        trace!("MenuState: open");
        self.open = true;
        self.highlighted = Some(MenuOption::ALL[0]);
    }

    /// Closing always forgets the highlighted option.
    pub fn close(&mut self) {
        trace!("MenuState: close");
        self.open = false;
        self.highlighted = None;
    }

    pub fn highlight(&mut self, option: MenuOption) {
        if self.open {
            self.highlighted = Some(option);
        }
    }

    pub fn highlight_next(&mut self) {
        self.step(1);
    }

    pub fn highlight_prev(&mut self) {
        self.step(MenuOption::ALL.len() - 1);
    }

    fn step(&mut self, by: usize) {
        if !self.open {
            return;
        }
        let len = MenuOption::ALL.len();
        let next = match self.highlighted {
            Some(current) => (current.index() + by) % len,
            None => 0,
        };
        self.highlighted = Some(MenuOption::ALL[next]);
    }
}
