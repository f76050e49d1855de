use tracing_subscriber::{filter::ParseError, reload, util::TryInitError};

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid log filter `{filter}`: {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber already installed: {0}")]
    Install(#[from] TryInitError),
    #[error("could not reload log filter: {0}")]
    Reload(#[from] reload::Error),
}
