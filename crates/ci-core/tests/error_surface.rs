use ci_core::errors::{CiError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "1")
        .with_context("reason", "example")
}

#[test]
fn not_found_error_surface() {
    let err = CiError::NotFound(sample_info("N001", "unknown profile").with_hint("try GPT-4"));
    assert_eq!(err.info().code, "N001");
    assert_eq!(err.info().hint.as_deref(), Some("try GPT-4"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("not found: unknown profile (code: N001)"));
    assert!(rendered.contains("id=1, reason=example"));
}

#[test]
fn malformed_input_error_surface() {
    let err = CiError::MalformedInput(sample_info("M001", "section is not a map"));
    assert_eq!(err.info().code, "M001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn chain_error_round_trips_as_json() {
    let err = CiError::Chain(sample_info("C001", "broken link"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Chain\""));
    let decoded: CiError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
