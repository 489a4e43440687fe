//! Predictive processing indicators.

use ci_core::profile::{flag, number, Architecture, InternalStates};
use ci_core::{IndicatorResult, IndicatorSpec, Profile, Theory};

use crate::details;

/// PP-1.
pub const PP_1: IndicatorSpec = IndicatorSpec {
    id: "PP-1",
    theory: Theory::Pp,
    name: "Hierarchical Prediction",
    description: "System has hierarchical predictive model with top-down predictions",
};

/// PP-2.
pub const PP_2: IndicatorSpec = IndicatorSpec {
    id: "PP-2",
    theory: Theory::Pp,
    name: "Error Minimization",
    description: "System actively minimizes prediction errors across hierarchical levels",
};

/// Evaluates PP-1 and PP-2.
pub fn evaluate(profile: &Profile) -> Vec<IndicatorResult> {
    let arch = &profile.architecture;
    vec![hierarchy(arch), error_minimization(arch, &profile.internal_states)]
}

fn hierarchy(arch: &Architecture) -> IndicatorResult {
    let depth = number(&arch.hierarchical_depth, "hierarchical_depth", 0.0);
    let top_down = flag(&arch.has_top_down_predictions, "has_top_down_predictions");
    let generative = flag(&arch.has_generative_model, "has_generative_model");

    let mut score = 0.0;
    score += (depth / 12.0).min(0.4);
    if top_down {
        score += 0.3;
    }
    if generative {
        score += 0.3;
    }

    IndicatorResult::scored(
        &PP_1,
        score,
        format!("Depth={depth}, top-down={top_down}, generative={generative}"),
        details([
            ("depth", depth.into()),
            ("top_down", top_down.into()),
            ("generative", generative.into()),
        ]),
    )
}

fn error_minimization(arch: &Architecture, internal: &InternalStates) -> IndicatorResult {
    let minimization = flag(
        &arch.prediction_error_minimization,
        "prediction_error_minimization",
    );
    // An unreported error is treated as the worst case.
    let mean_error = number(&internal.mean_prediction_error, "mean_prediction_error", 1.0);
    let convergence = number(
        &internal.prediction_error_convergence,
        "prediction_error_convergence",
        0.0,
    );

    let mut score = 0.0;
    if minimization {
        score += 0.4;
    }
    score += (1.0 - mean_error).max(0.0) * 0.3;
    score += convergence * 0.3;

    IndicatorResult::scored(
        &PP_2,
        score,
        format!(
            "PE minimization={minimization}, mean PE={mean_error:.3}, convergence={convergence:.2}"
        ),
        details([
            ("minimization", minimization.into()),
            ("mean_pe", mean_error.into()),
            ("convergence", convergence.into()),
        ]),
    )
}
