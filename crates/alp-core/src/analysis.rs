//! Derived per-category analysis results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Severity};

/// Average performance of one category, its shortfall against the target and
/// the resulting severity tier. Percentages are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeAnalysis {
    pub average: f64,
    pub gap: f64,
    pub severity: Severity,
}

/// One [`OutcomeAnalysis`] per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    #[serde(rename = "CO1")]
    pub co1: OutcomeAnalysis,
    #[serde(rename = "CO2")]
    pub co2: OutcomeAnalysis,
    #[serde(rename = "CO3")]
    pub co3: OutcomeAnalysis,
}

impl AnalysisReport {
    #[must_use]
    pub const fn get(&self, category: Category) -> &OutcomeAnalysis {
        match category {
            Category::Co1 => &self.co1,
            Category::Co2 => &self.co2,
            Category::Co3 => &self.co3,
        }
    }

    /// Categories paired with their analysis, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &OutcomeAnalysis)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}
