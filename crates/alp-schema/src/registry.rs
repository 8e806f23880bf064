//! Central schema registry for all learning-path document types.
//!
//! The `SchemaRegistry` builds JSON Schemas from alp-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use alp_core::scores::MarksEntry;
use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas the `alp` tools read or write.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all input, analysis, plan and
    /// response schemas from alp-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Score inputs (5) ---
        register!(schemas, "score_pair", alp_core::scores::ScorePair);
        register!(schemas, "period_scores", alp_core::scores::PeriodScores);
        register!(
            schemas,
            "outcome_assessment_set",
            alp_core::scores::OutcomeAssessmentSet
        );
        register!(schemas, "marks_entry", MarksEntry);
        register!(schemas, "marks_entries", Vec<MarksEntry>);

        // --- Analysis and plans (5) ---
        register!(
            schemas,
            "outcome_analysis",
            alp_core::analysis::OutcomeAnalysis
        );
        register!(schemas, "analysis_report", alp_core::analysis::AnalysisReport);
        register!(schemas, "resource", alp_core::plan::Resource);
        register!(schemas, "remediation_plan", alp_core::plan::RemediationPlan);
        register!(schemas, "recommendation", alp_core::plan::Recommendation);

        // --- CLI response types (3) ---
        register!(
            schemas,
            "analyze_response",
            alp_core::responses::AnalyzeResponse
        );
        register!(schemas, "plan_response", alp_core::responses::PlanResponse);
        register!(
            schemas,
            "recommendation_report",
            alp_core::responses::RecommendationReport
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
