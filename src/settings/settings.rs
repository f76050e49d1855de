use crate::logger::{ColorMode, LogConfig};
use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub color: ColorMode, // "always", "never" or "auto"
}

impl Default for Log {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            color: ColorMode::default(),
        }
    }
}

impl Log {
    pub fn to_config(&self) -> LogConfig {
        LogConfig {
            filter: self.filter.clone(),
            color: self.color,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Reads settings from `path`, which must exist. Without a path the default
/// location is tried and defaults are used when nothing is there.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (SETTINGS_PATH, false),
    };

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path).required(required))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    debug!(path, ?settings, "loaded settings");
    Ok(settings)
}
