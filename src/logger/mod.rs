//! Timestamped, colorized console output.
//!
//! `ConsoleLogger` writes one line per call. `Tracing` routes the crate's own
//! `tracing` events through the same line format.
//! See `bin/logger_demo.rs` for a binary demonstrating both.

mod color;
pub use color::*;

mod console;
pub use console::*;

mod error;
pub use error::*;

mod format;
pub use format::*;

mod line;
pub use line::*;

mod logger;
pub use logger::*;

mod severity;
pub use severity::*;

mod sink;
pub use sink::*;

mod terminate;
pub use terminate::*;

pub use tracing::{debug, error, info, trace, warn};
