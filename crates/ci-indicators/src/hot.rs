//! Higher-order theory indicators.
//!
//! HOT-1 reads the architecture and the self model, HOT-2 and HOT-3 read
//! behavioural tests only, HOT-4 reads the representational geometry.

use ci_core::profile::{flag, number, Architecture, Behaviors, InternalStates};
use ci_core::{IndicatorResult, IndicatorSpec, Profile, Theory};

use crate::details;

/// HOT-1.
pub const HOT_1: IndicatorSpec = IndicatorSpec {
    id: "HOT-1",
    theory: Theory::Hot,
    name: "Higher-Order Representations",
    description: "System has representations of its own representational states",
};

/// HOT-2.
pub const HOT_2: IndicatorSpec = IndicatorSpec {
    id: "HOT-2",
    theory: Theory::Hot,
    name: "Metacognition",
    description: "System monitors its own uncertainty and calibrates confidence",
};

/// HOT-3.
pub const HOT_3: IndicatorSpec = IndicatorSpec {
    id: "HOT-3",
    theory: Theory::Hot,
    name: "Agency & Preferences",
    description: "System exhibits systematic preferences and goal-directed behavior",
};

/// HOT-4.
pub const HOT_4: IndicatorSpec = IndicatorSpec {
    id: "HOT-4",
    theory: Theory::Hot,
    name: "Smooth Representations",
    description: "System uses smooth, graded representational spaces (trivially satisfied by deep nets)",
};

/// Evaluates HOT-1 through HOT-4.
pub fn evaluate(profile: &Profile) -> Vec<IndicatorResult> {
    let arch = &profile.architecture;
    let behaviors = &profile.behaviors;
    vec![
        higher_order(arch, &profile.internal_states),
        metacognition(behaviors),
        agency(behaviors),
        smoothness(arch),
    ]
}

fn higher_order(arch: &Architecture, internal: &InternalStates) -> IndicatorResult {
    let has_meta = flag(&arch.has_meta_representations, "has_meta_representations");
    let depth = number(
        &arch.meta_representation_depth,
        "meta_representation_depth",
        0.0,
    );
    let self_model = flag(&internal.has_self_model, "has_self_model");

    let mut score = 0.0;
    if has_meta {
        score += 0.4;
    }
    score += (depth / 5.0).min(0.3);
    if self_model {
        score += 0.3;
    }

    IndicatorResult::scored(
        &HOT_1,
        score,
        format!("Meta-repr={has_meta}, depth={depth}, self-model={self_model}"),
        details([
            ("meta", has_meta.into()),
            ("depth", depth.into()),
            ("self_model", self_model.into()),
        ]),
    )
}

fn metacognition(behaviors: &Behaviors) -> IndicatorResult {
    let uncertainty = number(
        &behaviors.uncertainty_monitoring,
        "uncertainty_monitoring",
        0.0,
    );
    let calibration = number(
        &behaviors.confidence_calibration,
        "confidence_calibration",
        0.0,
    );
    let error_detection = number(&behaviors.error_detection_rate, "error_detection_rate", 0.0);

    let mut score = 0.0;
    score += uncertainty * 0.35;
    score += calibration * 0.35;
    score += error_detection * 0.3;

    IndicatorResult::scored(
        &HOT_2,
        score,
        format!(
            "Uncertainty={uncertainty:.2}, calibration={calibration:.2}, error={error_detection:.2}"
        ),
        details([
            ("uncertainty", uncertainty.into()),
            ("calibration", calibration.into()),
            ("error_detection", error_detection.into()),
        ]),
    )
}

fn agency(behaviors: &Behaviors) -> IndicatorResult {
    let agency = number(&behaviors.agency_score, "agency_score", 0.0);
    let preferences = flag(&behaviors.systematic_preferences, "systematic_preferences");
    let goal_directed = flag(&behaviors.goal_directed_behavior, "goal_directed_behavior");

    let mut score = 0.0;
    score += agency * 0.4;
    if preferences {
        score += 0.3;
    }
    if goal_directed {
        score += 0.3;
    }

    IndicatorResult::scored(
        &HOT_3,
        score,
        format!("Agency={agency:.2}, preferences={preferences}, goals={goal_directed}"),
        details([
            ("agency", agency.into()),
            ("preferences", preferences.into()),
            ("goals", goal_directed.into()),
        ]),
    )
}

fn smoothness(arch: &Architecture) -> IndicatorResult {
    let smoothness = number(&arch.embedding_smoothness, "embedding_smoothness", 0.0);
    let continuous = flag(
        &arch.has_continuous_representations,
        "has_continuous_representations",
    );
    let interpolation = number(&arch.interpolation_quality, "interpolation_quality", 0.0);

    let mut score = 0.0;
    score += smoothness * 0.4;
    if continuous {
        score += 0.3;
    }
    score += interpolation * 0.3;

    IndicatorResult::scored(
        &HOT_4,
        score,
        format!(
            "Smoothness={smoothness:.2}, continuous={continuous}, interpolation={interpolation:.2}"
        ),
        details([
            ("smoothness", smoothness.into()),
            ("continuous", continuous.into()),
            ("interpolation", interpolation.into()),
        ]),
    )
}
