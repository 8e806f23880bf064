//! Schema lookup and validation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under the requested name.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// The document does not conform to the schema.
    #[error("Validation failed: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// The registered schema could not be compiled into a validator.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
