//! src/config.rs
//! ============================================================================
//! # Config: Widget Presentation Settings and Demo Host Options
//!
//! Loads and saves settings as TOML from the platform config path using the
//! [`directories`](https://docs.rs/directories) crate. Missing files are
//! created with defaults; missing keys fall back to their defaults.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.save().await?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tokio::fs as TokioFs;

use crate::{error::AppError, model::list_type::ListType};

const DEFAULT_SAMPLE_SIZE: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Row density the widget starts with.
    pub list_type: ListType,

    /// Outlined (boxed) search field instead of the underline style.
    pub outlined: bool,

    /// Muted palette for terminals without true color.
    pub compatibility: bool,

    /// Where "Export selected" writes its JSON files.
    pub export_dir: PathBuf,

    /// Cookies generated by the demo when no file is given.
    pub sample_size: usize,

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_type: ListType::Default,
            outlined: false,
            compatibility: false,
            export_dir: PathBuf::from("exports"),
            sample_size: DEFAULT_SAMPLE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads config from the platform config dir, or writes and returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/cookie-list/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        Self::load_from(&path).await
    }

    /// Saves config to the platform config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;
        self.save_to(&path).await
    }

    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        if TokioFs::try_exists(path)
            .await
            .map_err(|e| AppError::config_io(path, e))?
        {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|e| AppError::config_io(path, e))?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "example", "cookie-list")
            .ok_or_else(|| AppError::ConfigDir("no home directory found".into()))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}
