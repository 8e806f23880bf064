use alp_core::responses::PlanResponse;
use serde::Serialize;

use crate::cli::root_commands::PlanArgs;
use crate::context::AppContext;
use crate::output::output_with_rows;

#[derive(Debug, Serialize)]
struct PlanRow {
    kind: String,
    detail: String,
}

/// Handle `alp plan`.
pub fn handle(args: &PlanArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let response = build(args, ctx);
    let steps = response.plan.steps.iter().map(|step| PlanRow {
        kind: "step".to_string(),
        detail: step.clone(),
    });
    let resources = response.plan.resources.iter().map(|resource| PlanRow {
        kind: resource.kind.to_string(),
        detail: format!("{} <{}>", resource.title, resource.url),
    });
    let rows = steps.chain(resources).collect::<Vec<_>>();

    output_with_rows(&response, &rows, ctx.format)
}

fn build(args: &PlanArgs, ctx: &AppContext) -> PlanResponse {
    PlanResponse {
        category: args.category.clone(),
        severity: args.severity,
        plan: ctx.catalog.generate_plan(&args.category, args.severity),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use alp_core::enums::Severity;
    use alp_engine::PlanCatalog;

    use super::build;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::PlanArgs;
    use crate::context::AppContext;

    fn ctx() -> AppContext {
        AppContext {
            catalog: Cow::Borrowed(PlanCatalog::builtin()),
            target: 60.0,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn known_category_gets_steps_and_resources() {
        let args = PlanArgs {
            category: "CO1".into(),
            severity: Severity::Low,
        };

        let response = build(&args, &ctx());
        assert_eq!(response.category, "CO1");
        assert_eq!(response.plan.steps.len(), 2);
        assert_eq!(response.plan.resources.len(), 2);
    }

    #[test]
    fn unknown_category_keeps_steps_but_no_resources() {
        let args = PlanArgs {
            category: "CO9".into(),
            severity: Severity::High,
        };

        let response = build(&args, &ctx());
        assert_eq!(response.category, "CO9");
        assert_eq!(response.plan.steps.len(), 2);
        assert!(response.plan.resources.is_empty());
    }
}
