use mbm::logger::*;
use mbm::settings::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tracing = Tracing::bootstrap()?;

    let project_settings = parse_settings(cli.settings.as_deref())?;
    let mut log_config = project_settings.log.to_config();
    if let Some(color) = cli.color {
        log_config.color = color;
    }
    tracing.apply(&log_config)?;

    let logger = ConsoleLogger::stdout(log_config.color);
    logger.print("This is just a standard print");
    logger.highlight("This is just a highlighted print");
    logger.warning("This is just a warning print");
    logger.error("This is just an error print");
    logger.fatal("This is just a fatal print")
}
