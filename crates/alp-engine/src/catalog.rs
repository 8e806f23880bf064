//! Plan catalog: the step text for each severity tier and the learning
//! resources for each category.
//!
//! The catalog is data, not logic. A built-in copy is shared process-wide via
//! [`PlanCatalog::builtin`]; an alternative can be loaded from TOML with the
//! same layout as `data/catalog.toml`:
//!
//! ```toml
//! [steps]
//! no_gap = ["...", "..."]
//! low = ["...", "..."]
//! medium = ["...", "..."]
//! high = ["...", "..."]
//!
//! [[resources.CO1]]
//! title = "CO1 Basics - Video Playlist"
//! kind = "video"
//! url = "https://..."
//! notes = "..."
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use alp_core::enums::{Category, ResourceKind, Severity};
use alp_core::plan::Resource;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Number of steps every severity tier carries.
pub const STEPS_PER_TIER: usize = 2;

static BUILTIN: LazyLock<PlanCatalog> = LazyLock::new(PlanCatalog::builtin_content);

/// Recommended steps for each severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSteps {
    pub no_gap: Vec<String>,
    pub low: Vec<String>,
    pub medium: Vec<String>,
    pub high: Vec<String>,
}

impl TierSteps {
    #[must_use]
    pub fn get(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::NoGap => &self.no_gap,
            Severity::Low => &self.low,
            Severity::Medium => &self.medium,
            Severity::High => &self.high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    pub steps: TierSteps,
    /// Resources keyed by category key (`"CO1"`, ...).
    #[serde(default)]
    pub resources: BTreeMap<String, Vec<Resource>>,
}

impl PlanCatalog {
    /// The built-in catalog, constructed once on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse and validate a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed TOML and
    /// `CatalogError::Invalid` if the content breaks a catalog rule.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// errors of [`PlanCatalog::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.resources.len(),
            "loaded plan catalog"
        );
        Ok(catalog)
    }

    /// Check the content rules: every tier has exactly [`STEPS_PER_TIER`]
    /// non-empty steps and every resource key names a known category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` describing the first broken rule.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for severity in Severity::ALL {
            let steps = self.steps.get(severity);
            if steps.len() != STEPS_PER_TIER {
                return Err(CatalogError::Invalid(format!(
                    "tier '{severity}' has {} steps, expected {STEPS_PER_TIER}",
                    steps.len()
                )));
            }
            if steps.iter().any(|step| step.trim().is_empty()) {
                return Err(CatalogError::Invalid(format!(
                    "tier '{severity}' has an empty step"
                )));
            }
        }

        for key in self.resources.keys() {
            key.parse::<Category>()
                .map_err(|_| CatalogError::Invalid(format!("unknown resource category '{key}'")))?;
        }

        Ok(())
    }

    /// Steps for a severity tier.
    #[must_use]
    pub fn steps(&self, severity: Severity) -> &[String] {
        self.steps.get(severity)
    }

    /// Resources for a category key; empty for keys the catalog does not know.
    #[must_use]
    pub fn resources(&self, category: &str) -> &[Resource] {
        self.resources
            .get(category)
            .or_else(|| {
                let category = category.parse::<Category>().ok()?;
                self.resources.get(category.as_str())
            })
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn builtin_content() -> Self {
        let steps = TierSteps {
            no_gap: vec![
                "Maintain performance: weekly revision + advanced problems.".into(),
                "Suggested: timed quizzes & peer teaching.".into(),
            ],
            low: vec![
                "2-week focused revision: small practice sets + revision notes.".into(),
                "Suggested: 3 short quizzes and 2 revision sessions.".into(),
            ],
            medium: vec![
                "3\u{2013}4 week plan: strengthen fundamentals + guided practice.".into(),
                "Suggested: weekly quiz, extra practice assignments, 1 mini-project.".into(),
            ],
            high: vec![
                "Intensive 4+ week plan: re-learn basics, daily practice, mentor sessions.".into(),
                "Suggested: daily homework, weekly tests, mini-project.".into(),
            ],
        };

        let resource = |title: &str, kind: ResourceKind, url: &str, notes: &str| Resource {
            title: title.into(),
            kind,
            url: url.into(),
            notes: notes.into(),
        };

        let mut resources = BTreeMap::new();
        resources.insert(
            Category::Co1.as_str().to_string(),
            vec![
                resource(
                    "CO1 Basics - Video Playlist",
                    ResourceKind::Video,
                    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                    "Watch basics first (30-40 min)",
                ),
                resource(
                    "CO1 Practice Sheet",
                    ResourceKind::Pdf,
                    "https://example.com/co1-practice.pdf",
                    "Solve 10 problems",
                ),
            ],
        );
        resources.insert(
            Category::Co2.as_str().to_string(),
            vec![resource(
                "CO2 Lecture Notes",
                ResourceKind::Text,
                "https://example.com/co2notes",
                "Read and summarize",
            )],
        );
        resources.insert(
            Category::Co3.as_str().to_string(),
            vec![resource(
                "CO3 Mini Project",
                ResourceKind::Text,
                "https://example.com/co3project",
                "Implement small project",
            )],
        );

        Self { steps, resources }
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
