use alp_config::DefaultFormat;
use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl From<DefaultFormat> for OutputFormat {
    fn from(format: DefaultFormat) -> Self {
        match format {
            DefaultFormat::Json => Self::Json,
            DefaultFormat::Table => Self::Table,
            DefaultFormat::Raw => Self::Raw,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// `None` defers to `general.default_format` from config.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    /// Overrides `analysis.target` from config.
    pub target: Option<f64>,
}
