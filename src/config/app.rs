//! Application settings loaded from an optional `ledger.toml`.
//!
//! Every field has a default, so the ledger runs without any config file at all.
//! An explicitly requested file that is missing is an error; the default file
//! being absent is not.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "ledger.toml";

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Symbol printed in front of money values
    pub currency_symbol: String,
    /// Directory the export view writes its CSV sheets into
    pub export_dir: PathBuf,
    /// Database URL; `DATABASE_URL` and `--database-url` take precedence
    pub database_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₦".to_string(),
            export_dir: PathBuf::from("ledger_export"),
            database_url: None,
        }
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is malformed or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

/// Loads settings from `path`.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}

/// Loads settings from an explicit path, or from [`DEFAULT_CONFIG_PATH`] if it exists,
/// or falls back to defaults.
pub fn load_app_configuration(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            debug!("No config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}
