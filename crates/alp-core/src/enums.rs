//! Categories, assessment periods, severity tiers and resource kinds.
//!
//! Enums serialize with the exact strings the portal stores and displays
//! (`"CO1"`, `"no_gap"`, `"video"`). Each one provides `as_str()`, `Display`
//! and a `FromStr` that accepts the stored form case-insensitively.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A course outcome (CO) against which performance is measured.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    #[serde(rename = "CO1")]
    Co1,
    #[serde(rename = "CO2")]
    Co2,
    #[serde(rename = "CO3")]
    Co3,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Co1, Self::Co2, Self::Co3];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Co1 => "CO1",
            Self::Co2 => "CO2",
            Self::Co3 => "CO3",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Period
// ---------------------------------------------------------------------------

/// One of the two scored assessment events ("internals") per category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    First,
    Second,
}

impl Period {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// The 1-based period number as stored alongside a marks entry.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How far a category falls short of the target.
///
/// Variants are declared in order of increasing deficiency, so the derived
/// `Ord` reads naturally: `NoGap < Low < Medium < High`.
///
/// ```text
/// gap <= 0        no_gap
/// 0  < gap <= 10  low
/// 10 < gap <= 25  medium
/// gap > 25        high
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    NoGap,
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Self; 4] = [Self::NoGap, Self::Low, Self::Medium, Self::High];

    /// Whether this tier marks the category as needing remediation.
    #[must_use]
    pub const fn is_weak(self) -> bool {
        !matches!(self, Self::NoGap)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoGap => "no_gap",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// Media type of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Pdf,
    Text,
    Quiz,
}

impl ResourceKind {
    pub const ALL: [Self; 4] = [Self::Video, Self::Pdf, Self::Text, Self::Quiz];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Quiz => "quiz",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownResourceKind(s.to_string()))
    }
}
