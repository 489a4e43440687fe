use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theory::Theory;

/// Score at or above which an indicator counts as satisfied.
pub const SATISFIED_THRESHOLD: f64 = 0.7;
/// Score at or above which an indicator counts as partially satisfied.
pub const PARTIAL_THRESHOLD: f64 = 0.3;

/// Clamps a score into `[0, 1]`, mapping NaN to zero.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Static identity of one indicator in the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSpec {
    /// Stable identifier such as `GWT-2`.
    pub id: &'static str,
    /// Theory the indicator belongs to.
    pub theory: Theory,
    /// Short display name.
    pub name: &'static str,
    /// One sentence description of what the indicator tests.
    pub description: &'static str,
}

/// Three-way status derived from the satisfied and partial flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorStatus {
    /// Score reached the satisfied threshold.
    Satisfied,
    /// Score reached the partial threshold only.
    Partial,
    /// Score stayed below the partial threshold.
    NotSatisfied,
}

impl IndicatorStatus {
    /// Wire label (`SATISFIED`, `PARTIAL`, `NOT_SATISFIED`).
    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorStatus::Satisfied => "SATISFIED",
            IndicatorStatus::Partial => "PARTIAL",
            IndicatorStatus::NotSatisfied => "NOT_SATISFIED",
        }
    }

    /// Single glyph used by text reports.
    pub fn icon(self) -> char {
        match self {
            IndicatorStatus::Satisfied => '✓',
            IndicatorStatus::Partial => '◐',
            IndicatorStatus::NotSatisfied => '✗',
        }
    }
}

impl fmt::Display for IndicatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved input value recorded in [`IndicatorResult::details`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Observed {
    /// Boolean observation.
    Flag(bool),
    /// Numeric observation.
    Number(f64),
}

impl From<bool> for Observed {
    fn from(value: bool) -> Self {
        Observed::Flag(value)
    }
}

impl From<f64> for Observed {
    fn from(value: f64) -> Self {
        Observed::Number(value)
    }
}

/// Outcome of evaluating one indicator against a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Stable identifier such as `RPT-1`.
    pub indicator_id: String,
    /// Theory the indicator belongs to.
    pub theory: Theory,
    /// Short display name.
    pub name: String,
    /// One sentence description.
    pub description: String,
    /// Score in `[0, 1]`.
    pub score: f64,
    /// `score >= 0.7`.
    pub satisfied: bool,
    /// `score >= 0.3`; also true for satisfied indicators.
    pub partial: bool,
    /// One-line summary of the raw inputs used.
    pub evidence: String,
    /// Named auxiliary values used in scoring.
    #[serde(default)]
    pub details: BTreeMap<String, Observed>,
}

impl IndicatorResult {
    /// Builds a result for `spec`, clamping the score and deriving both flags.
    pub fn scored(
        spec: &IndicatorSpec,
        score: f64,
        evidence: String,
        details: BTreeMap<String, Observed>,
    ) -> Self {
        let score = clamp_unit(score);
        Self {
            indicator_id: spec.id.to_string(),
            theory: spec.theory,
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            score,
            satisfied: score >= SATISFIED_THRESHOLD,
            partial: score >= PARTIAL_THRESHOLD,
            evidence,
            details,
        }
    }

    /// Satisfied wins over partial; partial wins over not satisfied.
    pub fn status(&self) -> IndicatorStatus {
        if self.satisfied {
            IndicatorStatus::Satisfied
        } else if self.partial {
            IndicatorStatus::Partial
        } else {
            IndicatorStatus::NotSatisfied
        }
    }

    /// Returns whether the indicator falls in the countable partial bucket.
    pub fn is_partial_only(&self) -> bool {
        self.partial && !self.satisfied
    }

    /// Copy of this result forced to score zero with neither flag set.
    pub fn suppressed(&self) -> Self {
        Self {
            score: 0.0,
            satisfied: false,
            partial: false,
            ..self.clone()
        }
    }
}
