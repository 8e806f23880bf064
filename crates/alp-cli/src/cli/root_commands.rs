use std::path::PathBuf;

use alp_core::enums::Severity;
use alp_core::scores::ScorePair;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze scores: per-category average, gap and severity.
    Analyze(ScoreArgs),
    /// Analyze scores and attach a remediation plan to every category.
    Recommend(ScoreArgs),
    /// Look up the remediation plan for a category and severity.
    Plan(PlanArgs),
    /// Print JSON Schema for a document type.
    Schema(SchemaArgs),
}

/// Score input, either inline or from a stored marks file.
#[derive(Clone, Debug, Args)]
pub struct ScoreArgs {
    /// First assessment as CO1,CO2,CO3 pairs, e.g. `20/25,10/25,0/0`.
    #[arg(long, value_delimiter = ',', conflicts_with = "marks")]
    pub i1: Vec<ScorePair>,
    /// Second assessment in the same form. Omitted pairs count as 0%.
    #[arg(long, value_delimiter = ',', conflicts_with = "marks")]
    pub i2: Vec<ScorePair>,
    /// JSON array of marks entries, newest first.
    #[arg(long)]
    pub marks: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    /// Category key (CO1, CO2, CO3).
    pub category: String,
    /// Severity tier (no_gap, low, medium, high).
    pub severity: Severity,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name, e.g. `marks_entries`.
    #[arg(required_unless_present = "list")]
    pub type_name: Option<String>,
    /// List registered schema names instead.
    #[arg(long)]
    pub list: bool,
}
