use alp_core::enums::{Category, Severity};
use alp_core::responses::RecommendationReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::root_commands::ScoreArgs;
use crate::commands::shared::scores::load_assessment_set;
use crate::context::AppContext;
use crate::output::output_with_rows;

#[derive(Debug, Serialize)]
struct RecommendationRow {
    category: Category,
    gap: f64,
    severity: Severity,
    steps: String,
    resources: String,
}

/// Handle `alp recommend`.
pub fn handle(args: &ScoreArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let report = build(args, ctx, Utc::now())?;
    let rows = report
        .recommendations
        .iter()
        .map(|recommendation| RecommendationRow {
            category: recommendation.category,
            gap: recommendation.analysis.gap,
            severity: recommendation.analysis.severity,
            steps: recommendation.plan.steps.join(" / "),
            resources: recommendation
                .plan
                .resources
                .iter()
                .map(|resource| resource.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect::<Vec<_>>();

    output_with_rows(&report, &rows, ctx.format)
}

fn build(
    args: &ScoreArgs,
    ctx: &AppContext,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<RecommendationReport> {
    let set = load_assessment_set(args)?;
    let analysis = alp_engine::analyze(&set, ctx.target);
    let weak_categories = alp_engine::weak_categories(&analysis);
    if !weak_categories.is_empty() {
        tracing::info!(?weak_categories, "categories below target");
    }

    Ok(RecommendationReport {
        target: ctx.target,
        generated_at,
        recommendations: ctx.catalog.recommend(&analysis),
        weak_categories,
    })
}
