use std::io::{self, Write};
use std::process;

/// Ends the process after a fatal message.
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32) -> !;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) -> ! {
        let _ = io::stdout().flush();
        process::exit(code)
    }
}
