//! Gap analysis settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default target percentage.
const fn default_target() -> f64 {
    60.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Percentage every course outcome is measured against.
    #[serde(default = "default_target")]
    pub target: f64,
}

impl AnalysisConfig {
    /// Reject targets that are not a finite percentage.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `target` is non-finite or outside
    /// `0..=100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_target(self.target)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

/// Check that `target` is a finite percentage in `0..=100`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming `analysis.target` otherwise.
pub fn validate_target(target: f64) -> Result<(), ConfigError> {
    if target.is_finite() && (0.0..=100.0).contains(&target) {
        return Ok(());
    }
    Err(ConfigError::InvalidValue {
        field: "analysis.target".into(),
        reason: format!("{target} is not a percentage between 0 and 100"),
    })
}
