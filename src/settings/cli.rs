use super::Parser;
use crate::logger::ColorMode;

#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,
    /// Overrides `log.color` from the settings file.
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
}
