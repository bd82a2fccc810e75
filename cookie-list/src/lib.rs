pub mod error;

pub mod config;

pub mod controller {

    pub mod actions;
    pub use actions::Action;

    pub mod events;
    pub use events::{EventEmitter, ListEvent, ListObserver};

    pub mod input;
    pub use input::InputMapper;

    pub mod selection_controller;
    pub use selection_controller::{Focus, SelectionController};
}

pub mod model {
    pub mod cookie;
    pub use cookie::CookieItem;

    pub mod list_state;
    pub use list_state::ListState;

    pub mod list_type;
    pub use list_type::ListType;

    pub mod menu_state;
    pub use menu_state::{MenuOption, MenuState};

    pub mod search_field;
    pub use search_field::SearchField;
}

pub mod view {
    pub mod hit_map;
    pub use hit_map::{HitMap, HitTarget};

    pub mod icons;

    pub mod theme;

    pub mod ui;
    pub use ui::CookieListRenderer;

    pub mod components {
        pub mod context_menu;
        pub use context_menu::ContextMenu;
        pub mod cookie_rows;
        pub use cookie_rows::CookieRows;
        pub mod empty_info;
        pub use empty_info::EmptyInfo;
        pub mod header_bar;
        pub use header_bar::HeaderBar;
    }
}

pub mod host;
pub use host::CookieStore;

pub mod logging;
pub use logging::Logger;

pub mod terminal;

pub mod util {
    pub mod data_generator;
}

pub use error::AppError;

pub use controller::{Action, ListEvent, SelectionController};
pub use model::{CookieItem, ListType};
pub use view::CookieListRenderer;
