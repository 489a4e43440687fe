use std::collections::BTreeMap;

use ci_core::errors::CiError;
use ci_core::serde::{format_shortest_f64, to_canonical_json_bytes, to_spaced_canonical_json};
use ci_core::Theory;
use serde_json::json;

#[test]
fn shortest_floats_follow_repr_layout() {
    assert_eq!(format_shortest_f64(0.0), "0.0");
    assert_eq!(format_shortest_f64(-0.0), "-0.0");
    assert_eq!(format_shortest_f64(1.0), "1.0");
    assert_eq!(format_shortest_f64(0.05), "0.05");
    assert_eq!(format_shortest_f64(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_shortest_f64(0.0001), "0.0001");
    assert_eq!(format_shortest_f64(0.00001), "1e-05");
    assert_eq!(format_shortest_f64(0.000012345), "1.2345e-05");
    assert_eq!(format_shortest_f64(123.5), "123.5");
    assert_eq!(format_shortest_f64(1e15), "1000000000000000.0");
    assert_eq!(format_shortest_f64(1e16), "1e+16");
    assert_eq!(format_shortest_f64(-2.5e-7), "-2.5e-07");
    assert_eq!(format_shortest_f64(1e100), "1e+100");
}

#[test]
fn spaced_layout_sorts_nested_keys() -> Result<(), CiError> {
    let value = json!({
        "theories": {"RPT": 1.0, "AST": 0.5},
        "prev": "GENESIS",
        "credence": 0.05,
        "list": [1, 2.0, "x"],
    });
    let text = to_spaced_canonical_json(&value)?;
    assert_eq!(
        text,
        r#"{"credence": 0.05, "list": [1, 2.0, "x"], "prev": "GENESIS", "theories": {"AST": 0.5, "RPT": 1.0}}"#
    );
    Ok(())
}

#[test]
fn spaced_layout_escapes_non_ascii() -> Result<(), CiError> {
    let text = to_spaced_canonical_json(&json!({"system": "Caf\u{e9} \u{1F600}\u{7f}\n"}))?;
    assert_eq!(text, r#"{"system": "Caf\u00e9 \ud83d\ude00\u007f\n"}"#);
    assert!(text.is_ascii());
    Ok(())
}

#[test]
fn theory_maps_serialize_with_string_keys() -> Result<(), CiError> {
    let mut scores = BTreeMap::new();
    scores.insert(Theory::Rpt, 0.25);
    scores.insert(Theory::Ast, 0.0);
    let compact = String::from_utf8(to_canonical_json_bytes(&scores).expect("bytes"))
        .expect("utf8");
    assert_eq!(compact, r#"{"AST":0.0,"RPT":0.25}"#);
    assert_eq!(
        to_spaced_canonical_json(&scores)?,
        r#"{"AST": 0.0, "RPT": 0.25}"#
    );
    Ok(())
}
