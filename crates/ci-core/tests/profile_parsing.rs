use ci_core::errors::CiError;
use ci_core::profile::{flag, number};
use ci_core::{Profile, Reading};
use serde_json::json;

#[test]
fn empty_profile_parses_with_defaults() -> Result<(), CiError> {
    let profile = Profile::from_value(json!({}))?;
    assert_eq!(profile, Profile::default());
    assert_eq!(profile.name(), None);
    assert!(!flag(&profile.architecture.has_recurrent_connections, "x"));
    assert_eq!(
        number(&profile.architecture.broadcast_latency_ms, "x", f64::INFINITY),
        f64::INFINITY
    );
    Ok(())
}

#[test]
fn null_sections_and_fields_count_as_absent() -> Result<(), CiError> {
    let profile = Profile::from_value(json!({
        "metadata": null,
        "architecture": {"recurrence_depth": null},
        "behaviors": null,
    }))?;
    assert_eq!(profile, Profile::default());
    Ok(())
}

#[test]
fn non_map_section_is_malformed() {
    let err = Profile::from_value(json!({"architecture": 3})).expect_err("must fail");
    assert!(matches!(err, CiError::MalformedInput(_)));
    assert_eq!(err.info().code, "profile_value");
    assert!(err.info().hint.is_some());

    let err = Profile::from_json_slice(b"[1, 2, 3]").expect_err("must fail");
    assert!(matches!(err, CiError::MalformedInput(_)));
}

#[test]
fn readings_coerce_between_flags_and_numbers() -> Result<(), CiError> {
    let profile = Profile::from_value(json!({
        "metadata": {"name": "probe", "type": "test"},
        "architecture": {
            "has_recurrent_connections": 1,
            "recurrence_depth": true,
            "feedback_loop_count": "many",
            "has_central_workspace": 0.0,
            "extra_field_is_ignored": [1, 2],
        }
    }))?;
    let arch = &profile.architecture;
    assert_eq!(profile.name(), Some("probe"));
    assert_eq!(profile.kind(), Some("test"));
    assert!(flag(&arch.has_recurrent_connections, "has_recurrent_connections"));
    assert_eq!(number(&arch.recurrence_depth, "recurrence_depth", 0.0), 1.0);
    assert_eq!(
        arch.feedback_loop_count,
        Some(Reading::Other(json!("many")))
    );
    assert_eq!(number(&arch.feedback_loop_count, "feedback_loop_count", 0.0), 0.0);
    assert!(!flag(&arch.has_central_workspace, "has_central_workspace"));
    Ok(())
}

#[test]
fn nan_readings_resolve_to_defaults() {
    let reading = Some(Reading::Number(f64::NAN));
    assert_eq!(number(&reading, "nan", 0.5), 0.5);
    assert!(!flag(&reading, "nan"));
}

#[test]
fn yaml_profiles_match_json_profiles() -> Result<(), CiError> {
    let yaml = b"metadata:\n  name: Probe\n  type: Test\narchitecture:\n  has_recurrent_connections: true\n  recurrence_depth: 8\nbehaviors:\n  agency_score: 0.5\n";
    let from_yaml = Profile::from_yaml_slice(yaml)?;
    let from_json = Profile::from_value(json!({
        "metadata": {"name": "Probe", "type": "Test"},
        "architecture": {"has_recurrent_connections": true, "recurrence_depth": 8},
        "behaviors": {"agency_score": 0.5},
    }))?;
    assert_eq!(from_yaml, from_json);
    Ok(())
}

#[test]
fn scalar_metadata_labels_are_stringified() -> Result<(), CiError> {
    let profile = Profile::from_value(json!({
        "metadata": {"name": 42, "type": true},
        "architecture": {"recurrence_depth": 3},
    }))?;
    assert_eq!(profile.name(), Some("42"));
    assert_eq!(profile.kind(), Some("true"));
    assert_eq!(
        number(&profile.architecture.recurrence_depth, "recurrence_depth", 0.0),
        3.0
    );
    Ok(())
}

#[test]
fn structured_metadata_labels_count_as_absent() -> Result<(), CiError> {
    let profile = Profile::from_value(json!({
        "metadata": {"name": {"first": "Loop"}, "type": ["llm"]},
    }))?;
    assert_eq!(profile.name(), None);
    assert_eq!(profile.kind(), None);

    let profile = Profile::from_yaml_slice(b"metadata:\n  name: 7\n  type: [a, b]\n")?;
    assert_eq!(profile.name(), Some("7"));
    assert_eq!(profile.kind(), None);
    Ok(())
}

#[test]
fn numeric_flags_are_true_only_when_positive() {
    let cases = [(-1.0, false), (0.0, false), (0.5, true), (2.0, true)];
    for (value, expected) in cases {
        let reading = Some(Reading::Number(value));
        assert_eq!(flag(&reading, "numeric_flag"), expected, "value {value}");
    }
}
