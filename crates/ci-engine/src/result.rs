use ci_core::{IndicatorResult, IndicatorStatus, Theory, TheoryScores};
use serde::{Deserialize, Serialize};

use crate::proof::ProofRecord;

const RULE_WIDTH: usize = 70;
const BAR_WIDTH: usize = 20;

/// Outcome of one `assess` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Metadata name, or `Unknown System`.
    pub system_name: String,
    /// Metadata type, or `Unknown`.
    pub system_type: String,
    /// RFC 3339 UTC timestamp with microseconds.
    pub timestamp: String,
    /// Indicator results in battery order.
    pub indicators: Vec<IndicatorResult>,
    /// Aggregated credence in `[0, 0.99]`.
    pub credence: f64,
    /// Number of satisfied indicators.
    pub satisfied_count: usize,
    /// Number of partial but unsatisfied indicators.
    pub partial_count: usize,
    /// Number of indicators evaluated.
    pub total_indicators: usize,
    /// Mean score per theory, for every theory.
    pub theory_scores: TheoryScores,
    /// Digest of `proof_record`.
    pub proof_hash: String,
    /// Record the proof was computed from.
    pub proof_record: ProofRecord,
}

/// Machine readable view of an [`AssessmentResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    /// System name.
    pub system: String,
    /// System type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Assessment timestamp.
    pub timestamp: String,
    /// Credence as a percentage with one decimal, e.g. `5.0%`.
    pub credence: String,
    /// `satisfied/total`.
    pub satisfied: String,
    /// Partial but unsatisfied count.
    pub partial: usize,
    /// Mean score per theory.
    pub theories: TheoryScores,
    /// One line per indicator.
    pub indicators: Vec<IndicatorSummary>,
    /// Proof hash.
    pub proof: String,
}

/// Compact indicator entry in an [`AssessmentSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    /// Indicator identifier.
    pub id: String,
    /// Theory label.
    pub theory: Theory,
    /// Display name.
    pub name: String,
    /// Three-way status.
    pub status: IndicatorStatus,
    /// Score in `[0, 1]`.
    pub score: f64,
}

/// Formats a fraction as a percentage with `decimals` digits.
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

impl AssessmentResult {
    /// Builds the machine readable summary.
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            system: self.system_name.clone(),
            kind: self.system_type.clone(),
            timestamp: self.timestamp.clone(),
            credence: percent(self.credence, 1),
            satisfied: format!("{}/{}", self.satisfied_count, self.total_indicators),
            partial: self.partial_count,
            theories: self.theory_scores.clone(),
            indicators: self
                .indicators
                .iter()
                .map(|indicator| IndicatorSummary {
                    id: indicator.indicator_id.clone(),
                    theory: indicator.theory,
                    name: indicator.name.clone(),
                    status: indicator.status(),
                    score: indicator.score,
                })
                .collect(),
            proof: self.proof_hash.clone(),
        }
    }

    /// Returns the score of `theory`, or zero if absent.
    pub fn theory_score(&self, theory: Theory) -> f64 {
        self.theory_scores.get(&theory).copied().unwrap_or(0.0)
    }

    /// Human readable report with theory bars and per-indicator status.
    pub fn render_report(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            format!("CONSCIOUSNESS INDICATOR ASSESSMENT: {}", self.system_name),
            format!("Type: {}", self.system_type),
            format!("Timestamp: {}", self.timestamp),
            rule.clone(),
            String::new(),
            format!("BAYESIAN CREDENCE: {}", percent(self.credence, 1)),
            format!(
                "Indicators satisfied: {}/{}",
                self.satisfied_count, self.total_indicators
            ),
            format!(
                "Indicators partial: {}/{}",
                self.partial_count, self.total_indicators
            ),
            String::new(),
            "--- THEORY SCORES ---".to_string(),
        ];
        for (theory, score) in &self.theory_scores {
            let filled = ((score * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
            lines.push(format!(
                "  {:<4}: {}{} {:>4}  {}",
                theory.as_str(),
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled),
                percent(*score, 0),
                theory.full_name()
            ));
        }
        lines.push(String::new());
        lines.push("--- INDIVIDUAL INDICATORS ---".to_string());
        for indicator in &self.indicators {
            lines.push(format!(
                "  {} {:<6} [{:<3}] {}: {:.2}",
                indicator.status().icon(),
                indicator.indicator_id,
                indicator.theory.as_str(),
                indicator.name,
                indicator.score
            ));
        }
        lines.push(String::new());
        lines.push(format!("Proof: {}", self.proof_hash));
        lines.push(rule);
        lines.join("\n")
    }
}
