//! src/main.rs
//! Demo host embedding the cookie list: generates or loads cookies, filters
//! on search, deletes and exports on request.

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::event::{
    Event as TerminalEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use ratatui::{Frame, prelude::*, widgets::Paragraph};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use cookie_list::{
    CookieStore, Logger,
    config::Config,
    controller::{Focus, InputMapper, ListEvent, SelectionController},
    host::export_cookies,
    model::CookieItem,
    terminal::{AppTerminal, cleanup_terminal, setup_panic_handler, setup_terminal},
    util::data_generator::{generate_cookies, load_cookies},
    view::{CookieListRenderer, theme::Palette},
};

const NOTIFICATION_TTL: Duration = Duration::from_secs(4);
const TICK: Duration = Duration::from_millis(250);
const HELP: &str = " / search  space select  a all  m menu  d details  e export  Del delete  l density  o outline  c colors  g generate  X clear  q quit ";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        Config::default()
    });

    let _log_guard =
        Logger::init_tracing(&config.log_level).context("Failed to initialize logging")?;
    setup_panic_handler();
    info!("Starting cookie list demo");

    let source = std::env::args_os().nth(1).map(PathBuf::from);
    let cookies = match &source {
        Some(path) => load_cookies(path)
            .with_context(|| format!("Failed to load cookies from {}", path.display()))?,
        None => generate_cookies(config.sample_size),
    };

    let app = App::new(config, cookies).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

/// Keys the list leaves unhandled and the demo claims for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostCommand {
    Quit,
    ToggleOutlined,
    ToggleCompatibility,
    Generate,
    DropAll,
}

impl HostCommand {
    fn from_key(key: KeyEvent) -> Option<Self> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Self::Quit),
            (KeyCode::Char('o'), KeyModifiers::NONE) => Some(Self::ToggleOutlined),
            (KeyCode::Char('c'), KeyModifiers::NONE) => Some(Self::ToggleCompatibility),
            (KeyCode::Char('g'), KeyModifiers::NONE) => Some(Self::Generate),
            (KeyCode::Char('X'), _) => Some(Self::DropAll),
            _ => None,
        }
    }
}

struct App {
    terminal: AppTerminal,
    config: Config,
    controller: SelectionController,
    renderer: CookieListRenderer,
    mapper: InputMapper,
    events: mpsc::UnboundedReceiver<ListEvent>,
    store: CookieStore,
    notification: Option<(String, Instant)>,
    dirty: bool,
}

impl App {
    fn new(config: Config, cookies: Vec<CookieItem>) -> Result<Self> {
        let mut controller = SelectionController::from_config(&config);
        let events = controller.events();
        let mut store = CookieStore::new(cookies);
        store.refilter(&mut controller);

        let terminal = setup_terminal().context("Failed to initialize terminal")?;
        info!(count = store.len(), "Application initialized");

        Ok(Self {
            terminal,
            config,
            controller,
            renderer: CookieListRenderer::new(),
            mapper: InputMapper::new(),
            events,
            store,
            notification: None,
            dirty: true,
        })
    }

    async fn run(mut self) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(TICK);

        loop {
            self.render()?;

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if !self.handle_terminal_event(event) {
                                break;
                            }
                        }
                        Some(Err(e)) => warn!("Terminal event error: {e}"),
                        None => break,
                    }
                }

                Some(event) = self.events.recv() => {
                    self.handle_list_event(event).await;
                }

                _ = tick.tick() => self.expire_notification(),
            }
        }

        self.persist_settings().await;
        info!(
            frames = self.renderer.stats().frames,
            slow = self.renderer.stats().slow,
            "Event loop terminated cleanly"
        );
        Ok(())
    }

    /// Returns `false` to stop the loop.
    fn handle_terminal_event(&mut self, event: TerminalEvent) -> bool {
        match event {
            TerminalEvent::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return true;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return false;
                }

                match self.mapper.map_key(self.controller.focus(), key) {
                    Some(action) => {
                        self.controller.dispatch(action);
                    }
                    None if self.controller.focus() == Focus::List => {
                        if let Some(command) = HostCommand::from_key(key) {
                            return self.run_command(command);
                        }
                    }
                    None => {}
                }
            }

            TerminalEvent::Mouse(mouse) => {
                if let Some(action) =
                    self.mapper
                        .map_mouse(self.controller.focus(), self.renderer.hits(), mouse)
                {
                    self.controller.dispatch(action);
                }
            }

            TerminalEvent::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.controller.state().request_resize();
                self.controller.state().request_redraw();
            }

            _ => {}
        }
        true
    }

    fn run_command(&mut self, command: HostCommand) -> bool {
        debug!(?command, "Host command");
        match command {
            HostCommand::Quit => return false,
            HostCommand::ToggleOutlined => {
                let value = !self.controller.outlined();
                self.controller.set_outlined(value);
            }
            HostCommand::ToggleCompatibility => {
                let value = !self.controller.compatibility();
                self.controller.set_compatibility(value);
            }
            HostCommand::Generate => {
                let fresh = generate_cookies(self.config.sample_size);
                self.notify(format!("Generated {} cookies", fresh.len()));
                self.store.extend(fresh, &mut self.controller);
            }
            HostCommand::DropAll => {
                self.store.clear(&mut self.controller);
                self.notify("All cookies removed");
            }
        }
        true
    }

    async fn handle_list_event(&mut self, event: ListEvent) {
        debug!(event = event.name(), "List event");
        match event {
            ListEvent::DetailsRequested { item } => {
                self.notify(format!(
                    "{}={}  ({})",
                    item.name,
                    item.value,
                    item.location()
                ));
            }
            ListEvent::ExportRequested { items } => {
                match export_cookies(&self.config.export_dir, &items).await {
                    Ok(path) => {
                        info!(count = items.len(), path = %path.display(), "Cookies exported");
                        self.notify(format!(
                            "Exported {} cookie(s) to {}",
                            items.len(),
                            path.display()
                        ));
                    }
                    Err(e) => {
                        error!("Export failed: {e}");
                        self.notify(format!("Export failed: {e}"));
                    }
                }
            }
            ListEvent::SelectionChanged { indexes, .. } => {
                debug!(count = indexes.len(), "Selection changed");
            }
            ListEvent::DeleteRequested { .. } | ListEvent::SearchRequested { .. } => {
                if let Some(notice) = self.store.apply(&event, &mut self.controller) {
                    self.notify(notice);
                }
            }
        }
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some((message.into(), Instant::now()));
        self.dirty = true;
    }

    fn expire_notification(&mut self) {
        if let Some((_, shown_at)) = &self.notification
            && shown_at.elapsed() >= NOTIFICATION_TTL
        {
            self.notification = None;
            self.dirty = true;
        }
    }

    fn render(&mut self) -> Result<()> {
        if !self.dirty && !self.renderer.needs_paint(&self.controller) {
            return Ok(());
        }

        let Self {
            terminal,
            controller,
            renderer,
            notification,
            ..
        } = self;

        terminal
            .draw(|frame: &mut Frame<'_>| {
                let [list_area, status_area] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                        .areas(frame.area());
                renderer.render(frame, list_area, controller);

                let palette = Palette::for_mode(controller.compatibility());
                let status = match notification {
                    Some((message, _)) => Paragraph::new(format!(" {message}"))
                        .style(palette.counter()),
                    None => Paragraph::new(HELP).style(palette.location()),
                };
                frame.render_widget(status, status_area);
            })
            .context("Failed to draw terminal")?;

        self.dirty = false;
        Ok(())
    }

    async fn persist_settings(&mut self) {
        self.config.list_type = self.controller.list_type();
        self.config.outlined = self.controller.outlined();
        self.config.compatibility = self.controller.compatibility();
        if let Err(e) = self.config.save().await {
            warn!("Failed to save config: {e}");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_commands_only_on_plain_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            HostCommand::from_key(key(KeyCode::Char('q'))),
            Some(HostCommand::Quit)
        );
        assert_eq!(
            HostCommand::from_key(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(HostCommand::DropAll)
        );
        assert_eq!(
            HostCommand::from_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(HostCommand::from_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_help_names_every_list_binding() {
        for hint in ["/ search", "a all", "m menu", "d details", "e export", "Del delete", "l density"] {
            assert!(HELP.contains(hint), "missing {hint}");
        }
    }
}
