use ci_core::{IndicatorStatus, Observed, Profile, Theory};
use ci_indicators::{gwt, pp, rpt, Battery, Family};
use serde_json::json;

fn profile(value: serde_json::Value) -> Profile {
    Profile::from_value(value).expect("valid profile")
}

#[test]
fn full_recurrence_saturates_rpt_1() {
    let profile = profile(json!({
        "architecture": {
            "has_recurrent_connections": true,
            "recurrence_depth": 10,
            "feedback_loop_count": 5,
        }
    }));
    let results = rpt::evaluate(&profile);
    let recurrence = &results[0];
    assert_eq!(recurrence.indicator_id, "RPT-1");
    assert_eq!(recurrence.score, 1.0);
    assert!(recurrence.satisfied);
    assert!(recurrence.partial);
    assert_eq!(recurrence.status(), IndicatorStatus::Satisfied);
    assert_eq!(
        recurrence.evidence,
        "Recurrence: true, depth=10, loops=5"
    );
    assert_eq!(recurrence.details.get("depth"), Some(&Observed::Number(10.0)));
    assert_eq!(
        recurrence.details.get("recurrence"),
        Some(&Observed::Flag(true))
    );
}

#[test]
fn empty_profile_scores_zero_everywhere() {
    let results = Battery::standard().evaluate(&Profile::default());
    assert_eq!(results.len(), 13);
    for result in &results {
        assert_eq!(result.score, 0.0, "{}", result.indicator_id);
        assert_eq!(result.status(), IndicatorStatus::NotSatisfied);
    }
}

#[test]
fn thresholds_are_inclusive() {
    let profile = profile(json!({
        "architecture": {
            "has_recurrent_connections": true,
            "recurrence_depth": 3,
            "has_dynamic_routing": true,
        }
    }));
    let recurrence = &rpt::evaluate(&profile)[0];
    assert_eq!(recurrence.score, 0.7);
    assert!(recurrence.satisfied);

    let routing = &gwt::evaluate(&profile)[2];
    assert_eq!(routing.indicator_id, "GWT-3");
    assert_eq!(routing.score, 0.3);
    assert!(routing.partial);
    assert!(!routing.satisfied);
    assert!(routing.is_partial_only());
    assert_eq!(routing.status(), IndicatorStatus::Partial);
}

#[test]
fn broadcast_latency_gate_is_strict() {
    let fast = profile(json!({"architecture": {"broadcast_latency_ms": 99.9}}));
    let at_limit = profile(json!({"architecture": {"broadcast_latency_ms": 100}}));
    assert_eq!(gwt::evaluate(&fast)[1].score, 0.2);
    assert_eq!(gwt::evaluate(&at_limit)[1].score, 0.0);
    assert!(!gwt::evaluate(&Profile::default())[1]
        .details
        .contains_key("latency_ms"));
}

#[test]
fn missing_prediction_error_is_worst_case() {
    let unreported = pp::evaluate(&Profile::default());
    assert_eq!(unreported[1].score, 0.0);

    let perfect = profile(json!({"internal_states": {"mean_prediction_error": 0.0}}));
    let results = pp::evaluate(&perfect);
    assert!((results[1].score - 0.3).abs() < 1e-12);

    let runaway = profile(json!({"internal_states": {"mean_prediction_error": 4.0}}));
    assert_eq!(pp::evaluate(&runaway)[1].score, 0.0);
}

#[test]
fn oversized_inputs_are_clamped() {
    let profile = profile(json!({
        "architecture": {"feedback_connection_richness": 5.0, "cross_layer_feedback": 80},
        "behaviors": {"agency_score": -3.0},
    }));
    let feedback = &rpt::evaluate(&profile)[1];
    assert_eq!(feedback.score, 1.0);
    let agency = &Family::Hot.evaluate(&profile)[2];
    assert_eq!(agency.indicator_id, "HOT-3");
    assert_eq!(agency.score, 0.0);
}

#[test]
fn standard_battery_order_matches_specs() {
    let battery = Battery::default();
    assert_eq!(battery.families(), &Family::STANDARD);
    assert_eq!(battery.indicator_count(), 13);

    let ids: Vec<_> = battery
        .evaluate(&Profile::default())
        .into_iter()
        .map(|result| result.indicator_id)
        .collect();
    assert_eq!(
        ids,
        [
            "RPT-1", "RPT-2", "GWT-1", "GWT-2", "GWT-3", "HOT-1", "HOT-2", "HOT-3", "HOT-4",
            "PP-1", "PP-2", "AST-1", "AST-2",
        ]
    );

    for family in Family::STANDARD {
        for spec in family.specs() {
            assert_eq!(spec.theory, family.theory());
        }
    }
}

#[test]
fn custom_battery_runs_families_in_given_order() {
    let battery = Battery::new(vec![Family::Ast, Family::Rpt]);
    assert_eq!(battery.indicator_count(), 4);
    let results = battery.evaluate(&Profile::default());
    let theories: Vec<_> = results.iter().map(|result| result.theory).collect();
    assert_eq!(theories, [Theory::Ast, Theory::Ast, Theory::Rpt, Theory::Rpt]);

    let encoded = serde_json::to_string(&battery).expect("serialize battery");
    assert_eq!(encoded, r#"["AST","RPT"]"#);
    let decoded: Battery = serde_json::from_str(&encoded).expect("deserialize battery");
    assert_eq!(decoded, battery);
}

#[test]
fn negative_numeric_flag_adds_nothing() {
    let score = |value: f64| {
        rpt::evaluate(&profile(json!({
            "architecture": {"has_recurrent_connections": value}
        })))[0]
            .score
    };
    assert_eq!(score(-1.0), 0.0);
    assert_eq!(score(0.0), 0.0);
    assert!((score(1.0) - 0.4).abs() < 1e-12);
}

#[test]
fn hot_4_description_notes_deep_nets() {
    let results = Battery::new(vec![Family::Hot]).evaluate(&Profile::default());
    assert_eq!(
        results[3].description,
        "System uses smooth, graded representational spaces (trivially satisfied by deep nets)"
    );
}
