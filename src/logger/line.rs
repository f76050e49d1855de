use super::{Color, Severity, paint};
use chrono::{Local, NaiveDateTime};
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single console line: gray timestamp, a space, then the message body
/// in the color of its severity.
#[derive(Debug, Clone, Copy)]
pub struct LogLine<'a> {
    timestamp: NaiveDateTime,
    severity: Severity,
    message: &'a str,
    ansi: bool,
}

impl<'a> LogLine<'a> {
    pub fn now(severity: Severity, message: &'a str, ansi: bool) -> Self {
        Self::at(Local::now().naive_local(), severity, message, ansi)
    }

    pub fn at(timestamp: NaiveDateTime, severity: Severity, message: &'a str, ansi: bool) -> Self {
        Self {
            timestamp,
            severity,
            message,
            ansi,
        }
    }
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.format(TIMESTAMP_FORMAT);
        if !self.ansi {
            return write!(f, "{} {}", timestamp, self.message);
        }

        write!(f, "{} ", paint(timestamp, Color::Gray))?;
        match self.severity.color() {
            Some(color) => write!(f, "{}", paint(self.message, color)),
            None => f.write_str(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(12, 5, 7))
            .unwrap()
    }

    #[test]
    fn plain_body_is_not_wrapped() {
        let line = LogLine::at(noon(), Severity::Plain, "hello", true);
        assert_eq!(line.to_string(), "\x1b[90m2024-03-09 12:05:07\x1b[0m hello");
    }

    #[test]
    fn colored_bodies() {
        let cases = [
            (Severity::Highlight, "\x1b[35m"),
            (Severity::Warning, "\x1b[33m"),
            (Severity::Error, "\x1b[31m"),
            (Severity::Fatal, "\x1b[31m"),
        ];
        for (severity, escape) in cases {
            let line = LogLine::at(noon(), severity, "bad", true);
            assert_eq!(
                line.to_string(),
                format!("\x1b[90m2024-03-09 12:05:07\x1b[0m {escape}bad\x1b[0m"),
                "{severity:?}"
            );
        }
    }

    #[test]
    fn without_ansi_nothing_is_wrapped() {
        let line = LogLine::at(noon(), Severity::Error, "bad", false);
        assert_eq!(line.to_string(), "2024-03-09 12:05:07 bad");
    }

    #[test]
    fn control_characters_pass_through() {
        let line = LogLine::at(noon(), Severity::Plain, "a\tb\x1b[1m", false);
        assert_eq!(line.to_string(), "2024-03-09 12:05:07 a\tb\x1b[1m");
    }
}
