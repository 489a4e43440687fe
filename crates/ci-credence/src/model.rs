//! Aggregator constants, loadable from YAML.
//!
//! Every field falls back to the reference value when omitted, so a model
//! file only needs to list what it overrides:
//!
//! ```yaml
//! prior: 0.1
//! theory_weights:
//!   GWT: 0.4
//! ```

use std::collections::BTreeMap;

use ci_core::errors::{CiError, ErrorInfo};
use ci_core::Theory;
use serde::{Deserialize, Serialize};

/// Prior, likelihoods, theory weights and bonus used by [`crate::aggregate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredenceModel {
    /// Prior probability before any evidence is seen.
    #[serde(default = "CredenceModel::default_prior")]
    pub prior: f64,
    /// Likelihood attached to a satisfied indicator.
    #[serde(default = "CredenceModel::default_likelihood_satisfied")]
    pub likelihood_satisfied: f64,
    /// Likelihood attached to a partially satisfied indicator.
    #[serde(default = "CredenceModel::default_likelihood_partial")]
    pub likelihood_partial: f64,
    /// Likelihood attached to an unsatisfied indicator.
    #[serde(default = "CredenceModel::default_likelihood_not_satisfied")]
    pub likelihood_not_satisfied: f64,
    /// Relative confidence in each theory.
    #[serde(default = "CredenceModel::default_theory_weights")]
    pub theory_weights: BTreeMap<Theory, f64>,
    /// Weight for theories absent from `theory_weights`.
    #[serde(default = "CredenceModel::default_fallback_weight")]
    pub fallback_weight: f64,
    /// Mean theory score at or above which the theory earns a bonus.
    #[serde(default = "CredenceModel::default_bonus_threshold")]
    pub bonus_threshold: f64,
    /// Bonus per qualifying theory, scaled by the theory weight.
    #[serde(default = "CredenceModel::default_bonus_rate")]
    pub bonus_rate: f64,
    /// Upper bound on the reported credence.
    #[serde(default = "CredenceModel::default_ceiling")]
    pub ceiling: f64,
    /// Added to every likelihood ratio before taking its logarithm.
    #[serde(default = "CredenceModel::default_log_epsilon")]
    pub log_epsilon: f64,
}

impl CredenceModel {
    const fn default_prior() -> f64 {
        0.05
    }

    const fn default_likelihood_satisfied() -> f64 {
        0.85
    }

    const fn default_likelihood_partial() -> f64 {
        0.55
    }

    const fn default_likelihood_not_satisfied() -> f64 {
        0.15
    }

    fn default_theory_weights() -> BTreeMap<Theory, f64> {
        BTreeMap::from([
            (Theory::Rpt, 0.15),
            (Theory::Gwt, 0.25),
            (Theory::Hot, 0.25),
            (Theory::Pp, 0.15),
            (Theory::Ast, 0.20),
        ])
    }

    const fn default_fallback_weight() -> f64 {
        0.1
    }

    const fn default_bonus_threshold() -> f64 {
        0.7
    }

    const fn default_bonus_rate() -> f64 {
        0.03
    }

    const fn default_ceiling() -> f64 {
        0.99
    }

    const fn default_log_epsilon() -> f64 {
        1e-10
    }

    /// Weight of `theory`, or the fallback weight when it is not listed.
    pub fn weight(&self, theory: Theory) -> f64 {
        self.theory_weights
            .get(&theory)
            .copied()
            .unwrap_or(self.fallback_weight)
    }

    /// Odds form `p / (1 - p)` of the likelihood for the given flags.
    /// Satisfied takes precedence over partial.
    pub fn likelihood_ratio(&self, satisfied: bool, partial: bool) -> f64 {
        let likelihood = if satisfied {
            self.likelihood_satisfied
        } else if partial {
            self.likelihood_partial
        } else {
            self.likelihood_not_satisfied
        };
        likelihood / (1.0 - likelihood)
    }

    /// Prior expressed as odds.
    pub fn prior_odds(&self) -> f64 {
        self.prior / (1.0 - self.prior)
    }

    /// Checks that probabilities lie strictly inside `(0, 1)` and that weights
    /// and bonus terms are finite and non-negative.
    pub fn validate(&self) -> Result<(), CiError> {
        let open_unit = [
            ("prior", self.prior),
            ("likelihood_satisfied", self.likelihood_satisfied),
            ("likelihood_partial", self.likelihood_partial),
            ("likelihood_not_satisfied", self.likelihood_not_satisfied),
        ];
        for (field, value) in open_unit {
            if !(value > 0.0 && value < 1.0) {
                return Err(invalid(field, value, "must lie strictly between 0 and 1"));
            }
        }
        if !(self.ceiling > 0.0 && self.ceiling <= 1.0) {
            return Err(invalid("ceiling", self.ceiling, "must lie in (0, 1]"));
        }
        let non_negative = [
            ("fallback_weight", self.fallback_weight),
            ("bonus_threshold", self.bonus_threshold),
            ("bonus_rate", self.bonus_rate),
            ("log_epsilon", self.log_epsilon),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, value, "must be finite and non-negative"));
            }
        }
        for (theory, weight) in &self.theory_weights {
            if !(weight.is_finite() && *weight >= 0.0) {
                return Err(invalid(
                    &format!("theory_weights.{theory}"),
                    *weight,
                    "must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }

    /// Parses and validates a model from YAML.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, CiError> {
        let model: Self = serde_yaml::from_slice(data).map_err(|err| {
            CiError::MalformedInput(
                ErrorInfo::new("model_yaml", err.to_string())
                    .with_hint("model files are maps of aggregator constants"),
            )
        })?;
        model.validate()?;
        Ok(model)
    }
}

fn invalid(field: &str, value: f64, reason: &str) -> CiError {
    CiError::MalformedInput(
        ErrorInfo::new("model_invalid", format!("{field} {reason}"))
            .with_context("field", field)
            .with_context("value", value.to_string()),
    )
}

impl Default for CredenceModel {
    fn default() -> Self {
        Self {
            prior: Self::default_prior(),
            likelihood_satisfied: Self::default_likelihood_satisfied(),
            likelihood_partial: Self::default_likelihood_partial(),
            likelihood_not_satisfied: Self::default_likelihood_not_satisfied(),
            theory_weights: Self::default_theory_weights(),
            fallback_weight: Self::default_fallback_weight(),
            bonus_threshold: Self::default_bonus_threshold(),
            bonus_rate: Self::default_bonus_rate(),
            ceiling: Self::default_ceiling(),
            log_epsilon: Self::default_log_epsilon(),
        }
    }
}
