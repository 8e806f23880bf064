use alp_core::enums::{Category, Severity};
use alp_core::responses::AnalyzeResponse;
use serde::Serialize;

use crate::cli::root_commands::ScoreArgs;
use crate::commands::shared::scores::load_assessment_set;
use crate::context::AppContext;
use crate::output::output_with_rows;

#[derive(Debug, Serialize)]
struct AnalysisRow {
    category: Category,
    average: f64,
    gap: f64,
    severity: Severity,
}

/// Handle `alp analyze`.
pub fn handle(args: &ScoreArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let response = build(args, ctx)?;
    let rows = response
        .analysis
        .iter()
        .map(|(category, analysis)| AnalysisRow {
            category,
            average: analysis.average,
            gap: analysis.gap,
            severity: analysis.severity,
        })
        .collect::<Vec<_>>();

    output_with_rows(&response, &rows, ctx.format)
}

fn build(args: &ScoreArgs, ctx: &AppContext) -> anyhow::Result<AnalyzeResponse> {
    let set = load_assessment_set(args)?;
    Ok(AnalyzeResponse {
        target: ctx.target,
        analysis: alp_engine::analyze(&set, ctx.target),
    })
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use alp_core::enums::Severity;
    use alp_core::scores::ScorePair;
    use alp_engine::PlanCatalog;

    use super::build;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::ScoreArgs;
    use crate::context::AppContext;

    fn ctx(target: f64) -> AppContext {
        AppContext {
            catalog: Cow::Borrowed(PlanCatalog::builtin()),
            target,
            format: OutputFormat::Json,
        }
    }

    fn pairs(raw: &str) -> Vec<ScorePair> {
        raw.split(',')
            .map(|pair| pair.parse().expect("pair should parse"))
            .collect()
    }

    #[test]
    fn mixed_scores_produce_every_tier() {
        let args = ScoreArgs {
            i1: pairs("20/25,10/25,0/0"),
            i2: pairs("15/25,10/25,20/25"),
            marks: None,
        };

        let response = build(&args, &ctx(60.0)).expect("analysis should run");
        let analysis = response.analysis;

        assert!((analysis.co1.average - 70.0).abs() < 1e-9);
        assert_eq!(analysis.co1.severity, Severity::NoGap);
        assert!((analysis.co2.gap - 20.0).abs() < 1e-9);
        assert_eq!(analysis.co2.severity, Severity::Medium);
        assert!((analysis.co3.average - 40.0).abs() < 1e-9);
        assert_eq!(analysis.co3.severity, Severity::Medium);
    }

    #[test]
    fn target_comes_from_context() {
        let args = ScoreArgs {
            i1: pairs("20/25,20/25,20/25"),
            i2: pairs("20/25,20/25,20/25"),
            marks: None,
        };

        let response = build(&args, &ctx(90.0)).expect("analysis should run");
        assert!((response.target - 90.0).abs() < f64::EPSILON);
        assert!((response.analysis.co1.gap - 10.0).abs() < 1e-9);
        assert_eq!(response.analysis.co1.severity, Severity::Low);
    }
}
