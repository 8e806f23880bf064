//! Plan catalog source.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// TOML catalog file replacing the built-in plan content. Empty means
    /// built-in.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    /// Whether a custom catalog file is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// The configured catalog path, if any.
    #[must_use]
    pub fn custom_path(&self) -> Option<PathBuf> {
        self.is_configured().then(|| PathBuf::from(self.path.trim()))
    }
}
