//! src/logging.rs
//! File-only tracing setup. The terminal belongs to the TUI, so nothing is
//! written to stderr.

use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::Metadata;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, daily},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
};

use crate::error::AppError;

pub const LOG_DIR: &str = "logs";
const LOG_PREFIX: &str = "cookies";

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. Keep the guard alive until
    /// exit or buffered lines are lost.
    pub fn init_tracing(default_level: &str) -> Result<WorkerGuard, AppError> {
        // create logs/ if missing
        let log_dir: &Path = Path::new(LOG_DIR);
        fs::create_dir_all(log_dir)
            .map_err(|e| AppError::Logging(format!("cannot create {LOG_DIR}: {e}")))?;

        // daily rolling file appender → logs/cookies.YYYY-MM-DD
        let file: RollingFileAppender = daily(log_dir, LOG_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(file);

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(env_filter(default_level)?);

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string()))?;

        Ok(guard)
    }
}

/// `RUST_LOG` wins; otherwise `default_level` applies crate-wide.
fn env_filter(default_level: &str) -> Result<EnvFilter, AppError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level)
        .map_err(|e| AppError::invalid_input("log_level", e.to_string()))
}

static SEQ: AtomicUsize = AtomicUsize::new(1);

/// Custom formatter: `[SEQ] LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically‑increasing sequence number
        let seq: usize = SEQ.fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{} {}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        // span chain, outermost first
        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(w, "{}:", span.name())?;
            }
            write!(w, " ")?;
        }

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}
