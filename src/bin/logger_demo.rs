use mbm::logger::*;

fn main() -> anyhow::Result<()> {
    let tracing = Tracing::bootstrap()?;
    trace!("bootstrap trace log");
    debug!("bootstrap debug log");
    info!("bootstrap info log");

    let config = LogConfig {
        filter: "debug".to_string(),
        color: ColorMode::Always,
    };
    tracing.apply(&config)?;
    trace!("application trace log");
    debug!("application debug log");
    info!("application info log");
    warn!("application warn log");
    error!("application error log");

    // Same lines written directly, without going through tracing
    let logger = ConsoleLogger::stdout(config.color);
    for severity in Severity::ALL {
        logger.log(severity, &format!("direct {severity:?} line"));
    }

    let plain = ConsoleLogger::stdout(ColorMode::Never);
    plain.warning("uncolored warning");

    Ok(())
}
