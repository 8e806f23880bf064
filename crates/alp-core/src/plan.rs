//! Remediation plans and the learning resources attached to them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::OutcomeAnalysis;
use crate::enums::{Category, ResourceKind};

/// A linked learning resource (video, worksheet, notes, quiz).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Resource {
    pub title: String,
    pub kind: ResourceKind,
    pub url: String,
    #[serde(default)]
    pub notes: String,
}

/// Ordered recommended actions plus resources for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RemediationPlan {
    pub steps: Vec<String>,
    pub resources: Vec<Resource>,
}

/// Analysis and plan for one category, as shown to a student or printed in a
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub category: Category,
    pub analysis: OutcomeAnalysis,
    pub plan: RemediationPlan,
}
