//! Raw score inputs: score pairs, per-period score sheets and stored marks
//! entries.
//!
//! Every numeric field defaults to `0.0` when absent so that a partially
//! filled form still deserializes. Whether a pair is usable is decided by the
//! analyzer, not here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::enums::{Category, Period};
use crate::errors::CoreError;

/// One assessment's raw result for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScorePair {
    #[serde(default)]
    pub obtained: f64,
    #[serde(default)]
    pub maximum: f64,
}

impl ScorePair {
    #[must_use]
    pub const fn new(obtained: f64, maximum: f64) -> Self {
        Self { obtained, maximum }
    }
}

/// Parses the `obtained/maximum` shorthand used on the command line, e.g.
/// `"18.5/25"`.
impl FromStr for ScorePair {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (obtained, maximum) = s.split_once('/').ok_or_else(|| {
            CoreError::Validation(format!("expected 'obtained/maximum', got '{s}'"))
        })?;

        let parse = |raw: &str, field: &str| {
            raw.trim().parse::<f64>().map_err(|_| {
                CoreError::Validation(format!("invalid {field} value '{}' in '{s}'", raw.trim()))
            })
        };

        Ok(Self::new(parse(obtained, "obtained")?, parse(maximum, "maximum")?))
    }
}

/// The three category results of a single assessment period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PeriodScores {
    #[serde(rename = "CO1", default)]
    pub co1: ScorePair,
    #[serde(rename = "CO2", default)]
    pub co2: ScorePair,
    #[serde(rename = "CO3", default)]
    pub co3: ScorePair,
}

impl PeriodScores {
    #[must_use]
    pub const fn new(co1: ScorePair, co2: ScorePair, co3: ScorePair) -> Self {
        Self { co1, co2, co3 }
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> ScorePair {
        match category {
            Category::Co1 => self.co1,
            Category::Co2 => self.co2,
            Category::Co3 => self.co3,
        }
    }
}

/// Six score pairs: both assessment periods for all three categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeAssessmentSet {
    #[serde(default)]
    pub first: PeriodScores,
    #[serde(default)]
    pub second: PeriodScores,
}

impl OutcomeAssessmentSet {
    #[must_use]
    pub const fn new(first: PeriodScores, second: PeriodScores) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub const fn period(&self, period: Period) -> &PeriodScores {
        match period {
            Period::First => &self.first,
            Period::Second => &self.second,
        }
    }

    /// Both periods' pairs for one category, first period first.
    #[must_use]
    pub const fn pairs(&self, category: Category) -> [ScorePair; 2] {
        [self.first.get(category), self.second.get(category)]
    }

    /// Assemble a set from stored marks entries ordered newest first.
    ///
    /// Each period takes the newest entry tagged with its number, so a
    /// re-saved (corrected) period replaces the earlier save instead of
    /// displacing the other period. Entries with any other period number are
    /// ignored, and a period with no entry contributes all-zero pairs (0/0),
    /// which analyze to 0%.
    #[must_use]
    pub fn from_entries(entries: &[MarksEntry]) -> Self {
        let [first, second] = Period::ALL.map(|period| {
            entries
                .iter()
                .find(|entry| entry.period() == Some(period))
                .map(MarksEntry::scores)
                .unwrap_or_default()
        });

        Self::new(first, second)
    }
}

/// A marks row as the storage collaborator persists it: one period's results
/// for all three categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarksEntry {
    /// 1-based assessment period number.
    pub period: u8,
    #[serde(rename = "CO1", default)]
    pub co1: ScorePair,
    #[serde(rename = "CO2", default)]
    pub co2: ScorePair,
    #[serde(rename = "CO3", default)]
    pub co3: ScorePair,
}

impl MarksEntry {
    #[must_use]
    pub const fn new(period: Period, scores: PeriodScores) -> Self {
        Self {
            period: period.number(),
            co1: scores.co1,
            co2: scores.co2,
            co3: scores.co3,
        }
    }

    #[must_use]
    pub const fn period(&self) -> Option<Period> {
        Period::from_number(self.period)
    }

    #[must_use]
    pub const fn scores(&self) -> PeriodScores {
        PeriodScores::new(self.co1, self.co2, self.co3)
    }
}
