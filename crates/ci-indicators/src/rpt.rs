//! Recurrent processing indicators: algorithmic recurrence and rich feedback.

use ci_core::profile::{flag, number, Architecture};
use ci_core::{IndicatorResult, IndicatorSpec, Profile, Theory};

use crate::details;

/// RPT-1.
pub const RPT_1: IndicatorSpec = IndicatorSpec {
    id: "RPT-1",
    theory: Theory::Rpt,
    name: "Algorithmic Recurrence",
    description: "System implements recurrent processing with feedback loops",
};

/// RPT-2.
pub const RPT_2: IndicatorSpec = IndicatorSpec {
    id: "RPT-2",
    theory: Theory::Rpt,
    name: "Rich Feedback Connections",
    description: "Rich feedback connections between processing hierarchy levels",
};

/// Evaluates RPT-1 and RPT-2.
pub fn evaluate(profile: &Profile) -> Vec<IndicatorResult> {
    let arch = &profile.architecture;
    vec![recurrence(arch), feedback(arch)]
}

fn recurrence(arch: &Architecture) -> IndicatorResult {
    let has_recurrence = flag(&arch.has_recurrent_connections, "has_recurrent_connections");
    let depth = number(&arch.recurrence_depth, "recurrence_depth", 0.0);
    let loops = number(&arch.feedback_loop_count, "feedback_loop_count", 0.0);

    let mut score = 0.0;
    if has_recurrence {
        score += 0.4;
    }
    score += (depth / 10.0).min(0.3);
    score += (loops / 5.0).min(0.3);

    IndicatorResult::scored(
        &RPT_1,
        score,
        format!("Recurrence: {has_recurrence}, depth={depth}, loops={loops}"),
        details([
            ("recurrence", has_recurrence.into()),
            ("depth", depth.into()),
            ("loops", loops.into()),
        ]),
    )
}

fn feedback(arch: &Architecture) -> IndicatorResult {
    let richness = number(
        &arch.feedback_connection_richness,
        "feedback_connection_richness",
        0.0,
    );
    let bidirectional = flag(&arch.bidirectional_connections, "bidirectional_connections");
    let layer_feedback = number(&arch.cross_layer_feedback, "cross_layer_feedback", 0.0);

    let mut score = 0.0;
    score += richness * 0.4;
    if bidirectional {
        score += 0.3;
    }
    score += (layer_feedback / 8.0).min(0.3);

    IndicatorResult::scored(
        &RPT_2,
        score,
        format!(
            "Richness={richness:.2}, bidirectional={bidirectional}, cross-layer={layer_feedback}"
        ),
        details([
            ("richness", richness.into()),
            ("bidirectional", bidirectional.into()),
            ("cross_layer", layer_feedback.into()),
        ]),
    )
}
