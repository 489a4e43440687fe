use ci_core::errors::CiError;
use ci_core::Profile;
use ci_runner::{rank, render_comparative, AssessmentRunner, Catalog};
use serde_json::json;

#[test]
fn ranking_is_descending_and_stable() -> Result<(), CiError> {
    let mut catalog = Catalog::default();
    catalog.insert("first-empty", Profile::default());
    catalog.insert(
        "rich",
        Profile::from_value(json!({
            "metadata": {"name": "Rich"},
            "architecture": {"has_recurrent_connections": true, "recurrence_depth": 10},
        }))?,
    );
    catalog.insert(
        "second-empty",
        Profile::from_value(json!({"metadata": {"name": "Second"}}))?,
    );
    let runner = AssessmentRunner::with_catalog(catalog);
    let ranked = rank(runner.run_all_references()?);
    let names: Vec<_> = ranked.iter().map(|r| r.system_name.as_str()).collect();
    assert_eq!(names, ["Rich", "Unknown System", "Second"]);
    assert_eq!(ranked[1].credence, ranked[2].credence);
    Ok(())
}

#[test]
fn comparative_report_ranks_reference_systems() -> Result<(), CiError> {
    let runner = AssessmentRunner::new()?;
    let report = runner.comparative_report()?;
    let rank_rows: Vec<_> = report
        .lines()
        .filter(|line| line.starts_with(|ch: char| ch.is_ascii_digit()))
        .collect();
    assert_eq!(rank_rows.len(), 4);
    assert!(rank_rows[0].starts_with("1     ORION-Active-Inference Agent"));
    assert!(rank_rows[0].contains("89.1%"));
    assert!(rank_rows[0].ends_with("13/13"));
    assert!(rank_rows[1].starts_with("2     C. elegans (302 neurons)"));
    assert!(rank_rows[3].starts_with("4     Simple Thermostat"));
    assert!(report.contains("THEORY COMPARISON:"));
    assert!(report.contains(
        "ORION-Active-Inference Agent      96%     92%     87%     93%     88%"
    ));
    assert!(report.contains(
        "Simple Thermostat                 37%      3%      0%      7%      0%"
    ));
    assert_eq!(runner.engine().len(), 4);
    Ok(())
}

#[test]
fn empty_ranking_renders_headers_only() {
    let report = render_comparative(&[]);
    assert!(report.contains("Rank  System"));
    assert!(report.contains("Battery: 0 indicators across 5 theories"));
}

#[test]
fn yaml_catalog_preserves_file_order() -> Result<(), CiError> {
    let yaml = b"zeta:\n  metadata:\n    name: Zeta\nalpha:\n  architecture:\n    has_dynamic_routing: true\n";
    let catalog = Catalog::from_yaml_slice(yaml)?;
    assert_eq!(catalog.names(), ["zeta", "alpha"]);
    let runner = AssessmentRunner::with_catalog(catalog);
    let alpha = runner.run_reference("alpha")?;
    assert_eq!(alpha.partial_count, 1);
    Ok(())
}

#[test]
fn malformed_catalog_is_rejected() {
    let err = Catalog::from_json_slice(br#"{"bad": {"architecture": 7}}"#).expect_err("bad section");
    assert!(matches!(err, CiError::MalformedInput(_)));
    assert_eq!(err.info().code, "catalog_json");
    let err = Catalog::from_yaml_slice(b"- just\n- a list\n").expect_err("not a map");
    assert_eq!(err.info().code, "catalog_yaml");
}
