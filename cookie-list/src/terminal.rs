//! src/terminal.rs
//! Raw-mode / alternate-screen lifecycle for hosts running the list in a
//! real terminal.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::error::AppError;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn setup_terminal() -> Result<AppTerminal, AppError> {
    enable_raw_mode().map_err(|e| AppError::terminal("enable raw mode", e))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| AppError::terminal("enter alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| AppError::terminal("create terminal", e))?;

    info!("Terminal setup complete");
    Ok(terminal)
}

pub fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<(), AppError> {
    disable_raw_mode().map_err(|e| AppError::terminal("disable raw mode", e))?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(|e| AppError::terminal("leave alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::terminal("show cursor", e))?;

    info!("Terminal cleanup complete");
    Ok(())
}

/// Restores the terminal before the default hook prints the panic.
pub fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
