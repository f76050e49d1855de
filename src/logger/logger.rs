use super::{ColorMode, ConsoleFormat, LoggerError};
use std::io::{self, IsTerminal};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub struct LogConfig {
    pub filter: String,
    pub color: ColorMode,
}

/// Process-wide `tracing` subscriber printing through `ConsoleFormat`.
pub struct Tracing {
    reload_handle: reload::Handle<EnvFilter, Registry>,
    format: ConsoleFormat,
}

impl Tracing {
    /// Installs the subscriber with an `info` filter. Meant to run once,
    /// before settings are read, so that loading them can already log.
    pub fn bootstrap() -> Result<Self, LoggerError> {
        let filter = EnvFilter::new("info");
        let (filter, reload_handle) = reload::Layer::new(filter);
        let format = ConsoleFormat::new(ColorMode::default().enabled(io::stdout().is_terminal()));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().event_format(format.clone()))
            .try_init()?;

        Ok(Self {
            reload_handle,
            format,
        })
    }

    /// Applies the configured filter and color mode. Called once at start-up.
    pub fn apply(&self, config: &LogConfig) -> Result<(), LoggerError> {
        let filter =
            EnvFilter::try_new(&config.filter).map_err(|source| LoggerError::InvalidFilter {
                filter: config.filter.clone(),
                source,
            })?;
        self.reload_handle.reload(filter)?;
        self.format.set_ansi(config.color.enabled(io::stdout().is_terminal()));
        Ok(())
    }
}
