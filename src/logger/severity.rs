use super::Color;
use tracing::Level;

/// Exit status of the process after a fatal message.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Classification of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Plain,
    Highlight,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Plain,
        Severity::Highlight,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Color of the message body. Plain messages are written as is.
    pub fn color(self) -> Option<Color> {
        match self {
            Severity::Plain => None,
            Severity::Highlight => Some(Color::Purple),
            Severity::Warning => Some(Color::Yellow),
            Severity::Error | Severity::Fatal => Some(Color::Red),
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            _ => Severity::Plain,
        }
    }
}
