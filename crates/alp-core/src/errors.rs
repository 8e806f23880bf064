//! Cross-cutting error types for the learning-path crates.
//!
//! Only parsing and validation of caller-supplied values can fail here. The
//! analysis itself never errors; see `alp-engine`. Crate-specific errors
//! (`ConfigError`, `CatalogError`, `SchemaError`) live in their own crates and
//! converge into `anyhow` in `alp-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A category key that is not one of CO1, CO2, CO3.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A severity key that is not one of no_gap, low, medium, high.
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    /// A resource kind that is not one of video, pdf, text, quiz.
    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
