use std::path::Path;

use alp_core::scores::{MarksEntry, OutcomeAssessmentSet, PeriodScores, ScorePair};
use alp_schema::SchemaRegistry;
use anyhow::{Context, bail};

use crate::cli::root_commands::ScoreArgs;

/// Build the six-pair input from inline `--i1/--i2` lists or a `--marks` file.
pub fn load_assessment_set(args: &ScoreArgs) -> anyhow::Result<OutcomeAssessmentSet> {
    if let Some(path) = &args.marks {
        return read_marks_file(path);
    }

    if args.i1.is_empty() && args.i2.is_empty() {
        bail!("no scores given: pass --i1 (and optionally --i2) or --marks <file>");
    }

    let first = period_scores(&args.i1, "--i1")?;
    let second = period_scores(&args.i2, "--i2")?;
    Ok(OutcomeAssessmentSet::new(first, second))
}

/// An omitted period counts as three 0/0 pairs.
fn period_scores(pairs: &[ScorePair], flag: &str) -> anyhow::Result<PeriodScores> {
    match pairs {
        [] => Ok(PeriodScores::default()),
        [co1, co2, co3] => Ok(PeriodScores::new(*co1, *co2, *co3)),
        other => bail!(
            "{flag} expects 3 score pairs (CO1,CO2,CO3), got {}",
            other.len()
        ),
    }
}

fn read_marks_file(path: &Path) -> anyhow::Result<OutcomeAssessmentSet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read marks file {}", path.display()))?;
    parse_marks(&raw).with_context(|| format!("invalid marks file {}", path.display()))
}

/// Parse a JSON array of marks entries, newest first.
pub fn parse_marks(raw: &str) -> anyhow::Result<OutcomeAssessmentSet> {
    let value: serde_json::Value = serde_json::from_str(raw).context("marks file is not JSON")?;
    SchemaRegistry::new().validate("marks_entries", &value)?;

    let entries: Vec<MarksEntry> = serde_json::from_value(value)?;
    tracing::debug!(entries = entries.len(), "loaded marks entries");
    Ok(OutcomeAssessmentSet::from_entries(&entries))
}
