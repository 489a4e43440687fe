use ci_core::{IndicatorResult, TheoryScores};
use indexmap::IndexMap;
use log::trace;

use crate::model::CredenceModel;

/// Per-indicator credence contributions, in indicator order.
pub type Contributions = IndexMap<String, f64>;

/// Posterior credence in `[0, model.ceiling]` for the given evidence.
///
/// Each indicator contributes `weight * ln(lr + epsilon)` to the log
/// likelihood ratio, which updates the prior odds. Theories whose mean score
/// reaches the bonus threshold then add `bonus_rate * weight`, in theory
/// order.
pub fn aggregate(
    model: &CredenceModel,
    indicators: &[IndicatorResult],
    theory_scores: &TheoryScores,
) -> f64 {
    let mut log_lr = 0.0;
    for indicator in indicators {
        let weight = model.weight(indicator.theory);
        let lr = model.likelihood_ratio(indicator.satisfied, indicator.partial);
        log_lr += weight * (lr + model.log_epsilon).ln();
    }

    let posterior_odds = model.prior_odds() * log_lr.exp();
    let posterior = posterior_odds / (1.0 + posterior_odds);

    let mut bonus = 0.0;
    for (theory, score) in theory_scores {
        if *score >= model.bonus_threshold {
            bonus += model.bonus_rate * model.weight(*theory);
        }
    }

    trace!("log_lr={log_lr} posterior={posterior} bonus={bonus}");
    let credence = posterior + bonus;
    if credence.is_nan() {
        0.0
    } else {
        credence.min(model.ceiling).max(0.0)
    }
}

/// Credence lost when each indicator is suppressed in turn.
///
/// The counterfactual reuses `theory_scores` unchanged, so the theory bonus
/// is identical on both sides and only the likelihood term moves.
pub fn sensitivity_analysis(
    model: &CredenceModel,
    indicators: &[IndicatorResult],
    theory_scores: &TheoryScores,
) -> Contributions {
    let baseline = aggregate(model, indicators, theory_scores);
    let mut modified = indicators.to_vec();
    let mut contributions = Contributions::with_capacity(indicators.len());
    for (idx, indicator) in indicators.iter().enumerate() {
        modified[idx] = indicator.suppressed();
        let reduced = aggregate(model, &modified, theory_scores);
        modified[idx] = indicator.clone();
        contributions.insert(indicator.indicator_id.clone(), baseline - reduced);
    }
    contributions
}
