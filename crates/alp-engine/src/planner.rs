//! Plan generation: (category, severity) to steps plus resources.
//!
//! A pure two-key lookup into a [`PlanCatalog`]. Steps depend only on the
//! severity tier and resources only on the category. Lookups never fail: an
//! unknown category has no resources and an unknown severity key gets the
//! intensive (`high`) steps.

use alp_core::analysis::AnalysisReport;
use alp_core::enums::Severity;
use alp_core::plan::{Recommendation, RemediationPlan};

use crate::catalog::PlanCatalog;

impl PlanCatalog {
    /// Remediation plan for a category key and severity tier.
    #[must_use]
    pub fn generate_plan(&self, category: &str, severity: Severity) -> RemediationPlan {
        RemediationPlan {
            steps: self.steps(severity).to_vec(),
            resources: self.resources(category).to_vec(),
        }
    }

    /// Like [`PlanCatalog::generate_plan`] but with an untyped severity key.
    /// An unrecognized severity falls through to the `high` steps; resources
    /// still follow the category.
    #[must_use]
    pub fn plan_for_keys(&self, category: &str, severity: &str) -> RemediationPlan {
        let severity = severity.parse::<Severity>().unwrap_or_else(|_| {
            tracing::debug!(category, severity, "unknown severity, using high tier steps");
            Severity::High
        });
        self.generate_plan(category, severity)
    }

    /// Pair every category of an analysis with its plan.
    #[must_use]
    pub fn recommend(&self, report: &AnalysisReport) -> Vec<Recommendation> {
        report
            .iter()
            .map(|(category, analysis)| Recommendation {
                category,
                analysis: *analysis,
                plan: self.generate_plan(category.as_str(), analysis.severity),
            })
            .collect()
    }
}

/// [`PlanCatalog::generate_plan`] against the built-in catalog.
#[must_use]
pub fn generate_plan(category: &str, severity: Severity) -> RemediationPlan {
    PlanCatalog::builtin().generate_plan(category, severity)
}

/// [`PlanCatalog::plan_for_keys`] against the built-in catalog.
#[must_use]
pub fn plan_for_keys(category: &str, severity: &str) -> RemediationPlan {
    PlanCatalog::builtin().plan_for_keys(category, severity)
}

/// [`PlanCatalog::recommend`] against the built-in catalog.
#[must_use]
pub fn recommend(report: &AnalysisReport) -> Vec<Recommendation> {
    PlanCatalog::builtin().recommend(report)
}
