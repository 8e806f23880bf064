//! Plan catalog loading errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog content is not valid TOML for the catalog layout.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Catalog parsed but breaks a content rule.
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}
