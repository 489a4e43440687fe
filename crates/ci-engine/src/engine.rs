//! The indicator engine.
//!
//! One engine owns one proof chain. `assess` holds the history lock while it
//! reads the previous proof, scores the profile and appends the result, so
//! concurrent callers on a shared engine always observe a linear chain.

use std::sync::{Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};
use ci_core::errors::CiError;
use ci_core::{IndicatorResult, Profile, Theory, TheoryScores};
use ci_credence::{aggregate, sensitivity_analysis, Contributions, CredenceModel};
use ci_indicators::Battery;
use log::debug;

use crate::proof::{ProofRecord, GENESIS, UNKNOWN_SUBJECT};
use crate::result::AssessmentResult;

const UNKNOWN_SYSTEM: &str = "Unknown System";
const UNKNOWN_TYPE: &str = "Unknown";

/// Runs a battery against profiles and records every assessment.
#[derive(Debug)]
pub struct IndicatorEngine {
    battery: Battery,
    model: CredenceModel,
    history: Mutex<Vec<AssessmentResult>>,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorEngine {
    /// Standard battery, reference credence model, empty history.
    pub fn new() -> Self {
        Self {
            battery: Battery::standard(),
            model: CredenceModel::default(),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the credence model after validating it.
    pub fn with_model(mut self, model: CredenceModel) -> Result<Self, CiError> {
        model.validate()?;
        self.model = model;
        Ok(self)
    }

    /// Replaces the battery.
    pub fn with_battery(mut self, battery: Battery) -> Self {
        self.battery = battery;
        self
    }

    /// Battery in use.
    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    /// Credence model in use.
    pub fn model(&self) -> &CredenceModel {
        &self.model
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AssessmentResult>> {
        // Results are appended only once fully built, so a poisoned history
        // is still a valid chain.
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Scores `profile`, chains the result to the previous assessment and
    /// appends it to the history.
    pub fn assess(&self, profile: &Profile) -> Result<AssessmentResult, CiError> {
        let mut history = self.lock();

        let indicators = self.battery.evaluate(profile);
        let satisfied_count = indicators.iter().filter(|i| i.satisfied).count();
        let partial_count = indicators.iter().filter(|i| i.is_partial_only()).count();
        let theory_scores = theory_means(&indicators);
        let credence = aggregate(&self.model, &indicators, &theory_scores);

        let prev = history
            .last()
            .map(|last| last.proof_hash.clone())
            .unwrap_or_else(|| GENESIS.to_string());
        let proof_record = ProofRecord {
            system: profile.name().unwrap_or(UNKNOWN_SUBJECT).to_string(),
            credence,
            satisfied: satisfied_count,
            partial: partial_count,
            theories: theory_scores.clone(),
            prev,
        };
        let proof_hash = proof_record.digest()?;

        let result = AssessmentResult {
            system_name: profile.name().unwrap_or(UNKNOWN_SYSTEM).to_string(),
            system_type: profile.kind().unwrap_or(UNKNOWN_TYPE).to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            total_indicators: indicators.len(),
            indicators,
            credence,
            satisfied_count,
            partial_count,
            theory_scores,
            proof_hash,
            proof_record,
        };
        debug!(
            "assessed {} credence={:.4} satisfied={}/{} proof={}",
            result.system_name,
            result.credence,
            result.satisfied_count,
            result.total_indicators,
            result.proof_hash
        );
        history.push(result.clone());
        Ok(result)
    }

    /// Snapshot of every assessment in call order.
    pub fn history(&self) -> Vec<AssessmentResult> {
        self.lock().clone()
    }

    /// Number of recorded assessments.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether nothing has been assessed yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Proof of the latest assessment.
    pub fn last_proof(&self) -> Option<String> {
        self.lock().last().map(|result| result.proof_hash.clone())
    }

    /// Per-indicator credence contributions for `result` under this engine's
    /// model.
    pub fn sensitivity(&self, result: &AssessmentResult) -> Contributions {
        sensitivity_analysis(&self.model, &result.indicators, &result.theory_scores)
    }
}

/// Mean score per theory over `indicators`; theories without indicators
/// score zero.
pub fn theory_means(indicators: &[IndicatorResult]) -> TheoryScores {
    Theory::ALL
        .into_iter()
        .map(|theory| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for indicator in indicators.iter().filter(|i| i.theory == theory) {
                sum += indicator.score;
                count += 1;
            }
            let mean = if count == 0 { 0.0 } else { sum / count as f64 };
            (theory, mean)
        })
        .collect()
}
