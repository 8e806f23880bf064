//! General application configuration.

use serde::{Deserialize, Serialize};

/// Output format used when `--format` is not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultFormat {
    #[default]
    Json,
    Table,
    Raw,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub default_format: DefaultFormat,
}
