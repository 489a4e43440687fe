//! Global workspace indicators: specialised modules, global broadcast and
//! flexible routing.

use ci_core::profile::{flag, number, Architecture, Behaviors};
use ci_core::{IndicatorResult, IndicatorSpec, Profile, Theory};

use crate::details;

/// Latency below which broadcast counts as fast enough for ignition.
pub const BROADCAST_LATENCY_LIMIT_MS: f64 = 100.0;

/// GWT-1.
pub const GWT_1: IndicatorSpec = IndicatorSpec {
    id: "GWT-1",
    theory: Theory::Gwt,
    name: "Specialized Modules",
    description: "System has multiple specialized processing modules",
};

/// GWT-2.
pub const GWT_2: IndicatorSpec = IndicatorSpec {
    id: "GWT-2",
    theory: Theory::Gwt,
    name: "Global Broadcast",
    description: "Information can be broadcast globally across all modules",
};

/// GWT-3.
pub const GWT_3: IndicatorSpec = IndicatorSpec {
    id: "GWT-3",
    theory: Theory::Gwt,
    name: "Flexible Routing",
    description: "Information routing is flexible and context-dependent",
};

/// Evaluates GWT-1 through GWT-3.
pub fn evaluate(profile: &Profile) -> Vec<IndicatorResult> {
    let arch = &profile.architecture;
    vec![
        modules(arch),
        broadcast(arch, &profile.behaviors),
        routing(arch),
    ]
}

fn modules(arch: &Architecture) -> IndicatorResult {
    let module_count = number(&arch.specialized_module_count, "specialized_module_count", 0.0);
    let specialization = number(
        &arch.module_specialization_score,
        "module_specialization_score",
        0.0,
    );
    let has_workspace = flag(&arch.has_central_workspace, "has_central_workspace");

    let mut score = 0.0;
    score += (module_count / 10.0).min(0.4);
    score += specialization * 0.3;
    if has_workspace {
        score += 0.3;
    }

    IndicatorResult::scored(
        &GWT_1,
        score,
        format!(
            "Modules={module_count}, specialization={specialization:.2}, workspace={has_workspace}"
        ),
        details([
            ("modules", module_count.into()),
            ("specialization", specialization.into()),
            ("workspace", has_workspace.into()),
        ]),
    )
}

fn broadcast(arch: &Architecture, behaviors: &Behaviors) -> IndicatorResult {
    let capability = number(
        &arch.global_broadcast_capability,
        "global_broadcast_capability",
        0.0,
    );
    let ignition = flag(
        &behaviors.workspace_ignition_detected,
        "workspace_ignition_detected",
    );
    let latency = number(
        &arch.broadcast_latency_ms,
        "broadcast_latency_ms",
        f64::INFINITY,
    );

    let mut score = 0.0;
    score += capability * 0.4;
    if ignition {
        score += 0.4;
    }
    if latency < BROADCAST_LATENCY_LIMIT_MS {
        score += 0.2;
    }

    IndicatorResult::scored(
        &GWT_2,
        score,
        format!("Broadcast={capability:.2}, ignition={ignition}, latency_ms={latency}"),
        details([
            ("broadcast", capability.into()),
            ("ignition", ignition.into()),
        ]),
    )
}

fn routing(arch: &Architecture) -> IndicatorResult {
    let flexibility = number(&arch.routing_flexibility, "routing_flexibility", 0.0);
    let dynamic = flag(&arch.has_dynamic_routing, "has_dynamic_routing");
    let attention = flag(&arch.has_attention_mechanism, "has_attention_mechanism");

    let mut score = 0.0;
    score += flexibility * 0.4;
    if dynamic {
        score += 0.3;
    }
    if attention {
        score += 0.3;
    }

    IndicatorResult::scored(
        &GWT_3,
        score,
        format!("Flexibility={flexibility:.2}, dynamic={dynamic}, attention={attention}"),
        details([
            ("flexibility", flexibility.into()),
            ("dynamic", dynamic.into()),
            ("attention", attention.into()),
        ]),
    )
}
