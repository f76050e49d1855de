use super::{LogLine, Severity};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders `tracing` events as console lines, so `warn!("x")` prints the
/// same as `ConsoleLogger::warning("x")`.
///
/// Clones share the color switch.
#[derive(Debug, Clone)]
pub struct ConsoleFormat {
    ansi: Arc<AtomicBool>,
}

impl ConsoleFormat {
    pub fn new(ansi: bool) -> Self {
        Self {
            ansi: Arc::new(AtomicBool::new(ansi)),
        }
    }

    pub fn set_ansi(&self, ansi: bool) {
        self.ansi.store(ansi, Ordering::Relaxed);
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.format_fields(Writer::new(&mut message), event)?;

        let severity = Severity::from(*event.metadata().level());
        let line = LogLine::now(severity, &message, self.ansi.load(Ordering::Relaxed));
        writeln!(writer, "{line}")
    }
}
