use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

pub const RESET: &str = "\x1b[0m";

/// Foreground colors used by the console format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gray,
    Purple,
    Yellow,
    Red,
}

impl Color {
    pub fn escape(self) -> &'static str {
        match self {
            Color::Gray => "\x1b[90m",
            Color::Purple => "\x1b[35m",
            Color::Yellow => "\x1b[33m",
            Color::Red => "\x1b[31m",
        }
    }
}

/// `content` wrapped in the escape code of a color followed by a reset.
#[derive(Debug, Clone, Copy)]
pub struct Painted<D> {
    content: D,
    color: Color,
}

pub fn paint<D: fmt::Display>(content: D, color: Color) -> Painted<D> {
    Painted { content, color }
}

impl<D: fmt::Display> fmt::Display for Painted<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.color.escape(), self.content, RESET)
    }
}

/// Whether escape codes are written at all.
///
/// `Always` emits them even when stdout is redirected to a file or a pipe.
/// `Auto` only emits them when the sink reports a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    Auto,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }
}
