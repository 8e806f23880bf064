//! CLI response types returned as JSON by `alp` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;
use crate::enums::{Category, Severity};
use crate::plan::{Recommendation, RemediationPlan};

/// Response from `alp analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeResponse {
    pub target: f64,
    pub analysis: AnalysisReport,
}

/// Response from `alp plan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlanResponse {
    /// Category key as given; may be one the catalog does not know.
    pub category: String,
    pub severity: Severity,
    pub plan: RemediationPlan,
}

/// Response from `alp recommend`: the printable student report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecommendationReport {
    pub target: f64,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<Recommendation>,
    /// Categories a student may raise questions about.
    pub weak_categories: Vec<Category>,
}
