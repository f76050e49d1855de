use super::{
    ColorMode, FATAL_EXIT_CODE, LineSink, LogLine, ProcessExit, Severity, StdoutSink, Terminator,
};

/// Writes timestamped, colorized lines to a sink.
///
/// Owned by the caller and passed where it is needed. It carries no state
/// between calls, so one instance can be shared freely across threads.
///
/// ```no_run
/// use mbm::logger::{ColorMode, ConsoleLogger};
///
/// let logger = ConsoleLogger::stdout(ColorMode::Always);
/// logger.print("starting");
/// logger.warning("disk almost full");
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleLogger<S = StdoutSink, T = ProcessExit> {
    sink: S,
    terminator: T,
    ansi: bool,
}

impl ConsoleLogger {
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(StdoutSink, ProcessExit, mode)
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::stdout(ColorMode::default())
    }
}

impl<S: LineSink, T: Terminator> ConsoleLogger<S, T> {
    pub fn new(sink: S, terminator: T, mode: ColorMode) -> Self {
        let ansi = mode.enabled(sink.is_terminal());
        Self {
            sink,
            terminator,
            ansi,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn ansi(&self) -> bool {
        self.ansi
    }

    /// Formats and writes one line. Never terminates, even for `Severity::Fatal`.
    pub fn log(&self, severity: Severity, message: &str) {
        let line = LogLine::now(severity, message, self.ansi);
        self.sink.write_line(&line.to_string());
    }

    pub fn print(&self, message: &str) {
        self.log(Severity::Plain, message);
    }

    pub fn highlight(&self, message: &str) {
        self.log(Severity::Highlight, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Writes the message in red, then ends the process with status 1.
    pub fn fatal(&self, message: &str) -> ! {
        self.log(Severity::Fatal, message);
        self.terminator.terminate(FATAL_EXIT_CODE)
    }
}
