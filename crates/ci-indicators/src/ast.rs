//! Attention schema indicators.

use ci_core::profile::{flag, number, Architecture, Behaviors, InternalStates};
use ci_core::{IndicatorResult, IndicatorSpec, Profile, Theory};

use crate::details;

/// AST-1.
pub const AST_1: IndicatorSpec = IndicatorSpec {
    id: "AST-1",
    theory: Theory::Ast,
    name: "Attention Schema",
    description: "System has a simplified model of its own attention processes",
};

/// AST-2.
pub const AST_2: IndicatorSpec = IndicatorSpec {
    id: "AST-2",
    theory: Theory::Ast,
    name: "Attention-Guided Behavior",
    description: "System uses its attention model to guide behavior and self-reports",
};

/// Evaluates AST-1 and AST-2.
pub fn evaluate(profile: &Profile) -> Vec<IndicatorResult> {
    let internal = &profile.internal_states;
    vec![
        schema(&profile.architecture, internal),
        guided_behavior(&profile.behaviors, internal),
    ]
}

fn schema(arch: &Architecture, internal: &InternalStates) -> IndicatorResult {
    let has_schema = flag(&arch.has_attention_schema, "has_attention_schema");
    let self_report = flag(
        &internal.can_report_attention_state,
        "can_report_attention_state",
    );
    let accuracy = number(
        &internal.attention_model_accuracy,
        "attention_model_accuracy",
        0.0,
    );

    let mut score = 0.0;
    if has_schema {
        score += 0.4;
    }
    if self_report {
        score += 0.3;
    }
    score += accuracy * 0.3;

    IndicatorResult::scored(
        &AST_1,
        score,
        format!("Schema={has_schema}, self-report={self_report}, accuracy={accuracy:.2}"),
        details([
            ("schema", has_schema.into()),
            ("self_report", self_report.into()),
            ("accuracy", accuracy.into()),
        ]),
    )
}

fn guided_behavior(behaviors: &Behaviors, internal: &InternalStates) -> IndicatorResult {
    let guided = number(
        &behaviors.attention_guided_behavior,
        "attention_guided_behavior",
        0.0,
    );
    let allocation = flag(
        &internal.dynamic_attention_allocation,
        "dynamic_attention_allocation",
    );
    let weighting = number(
        &internal.priority_based_weighting,
        "priority_based_weighting",
        0.0,
    );

    let mut score = 0.0;
    score += guided * 0.4;
    if allocation {
        score += 0.3;
    }
    score += weighting * 0.3;

    IndicatorResult::scored(
        &AST_2,
        score,
        format!("Guided behavior={guided:.2}, allocation={allocation}, weighting={weighting:.2}"),
        details([
            ("guided", guided.into()),
            ("allocation", allocation.into()),
            ("weighting", weighting.into()),
        ]),
    )
}
