//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Cookie List
//!
//! Every fallible path in the crate (config files, JSON cookie dumps, log
//! setup, terminal I/O, host input) returns `Result<T, AppError>`. The widget
//! operations themselves never fail: out-of-range indexes are ignored.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No home / config directory could be determined.
    #[error("Config directory unavailable: {0}")]
    ConfigDir(String),

    /// Cookie dump (de)serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input validation errors
    #[error("Invalid input: {field} - {message}")]
    InvalidInput {
        field: String, // "list_type", "cookies", etc.
        message: String,
    },

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    /// Create an input validation error
    pub fn invalid_input<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Terminal failure during `stage` ("enable raw mode", ...).
    pub fn terminal(stage: &str, source: io::Error) -> Self {
        Self::Terminal(format!("{stage}: {source}"))
    }

    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = AppError::invalid_input("list_type", "unknown value 'dense'");
        assert_eq!(
            err.to_string(),
            "Invalid input: list_type - unknown value 'dense'"
        );
    }

    #[test]
    fn test_terminal_error_names_stage() {
        let err = AppError::terminal(
            "enable raw mode",
            io::Error::new(io::ErrorKind::Unsupported, "not a tty"),
        );
        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(
            err.to_string(),
            "Terminal error: enable raw mode: not a tty"
        );
    }
}
