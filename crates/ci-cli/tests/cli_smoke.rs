use std::fs;
use std::process::{Command, Output};

use serde_json::Value;

fn ci(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ci"))
        .args(args)
        .output()
        .expect("run ci binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn assess_prints_summary_json_for_yaml_profiles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("loop.yaml");
    fs::write(
        &path,
        "metadata:\n  name: Loop\n  type: Controller\narchitecture:\n  has_recurrent_connections: true\n  recurrence_depth: 10\n  feedback_loop_count: 5\n",
    )
    .expect("write profile");

    let output = ci(&["assess", "--profile", path.to_str().expect("path")]);
    assert!(output.status.success(), "{output:?}");
    let summary: Value = serde_json::from_str(&stdout(&output)).expect("summary json");
    assert_eq!(summary["system"], "Loop");
    assert_eq!(summary["type"], "Controller");
    assert_eq!(summary["satisfied"], "1/13");
    assert_eq!(summary["indicators"][0]["status"], "SATISFIED");
    assert!(summary["proof"]
        .as_str()
        .is_some_and(|proof| proof.starts_with("sha256:")));
}

#[test]
fn assess_honours_a_model_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let profile = dir.path().join("empty.json");
    let model = dir.path().join("model.yaml");
    fs::write(&profile, "{}").expect("write profile");
    fs::write(&model, "prior: 1.5\n").expect("write model");

    let output = ci(&[
        "assess",
        "--profile",
        profile.to_str().expect("path"),
        "--model",
        model.to_str().expect("path"),
    ]);
    assert!(!output.status.success());
}

#[test]
fn reference_report_and_unknown_name() {
    let output = ci(&["reference", "--name", "Thermostat", "--report"]);
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("CONSCIOUSNESS INDICATOR ASSESSMENT: Simple Thermostat"));

    let output = ci(&["reference", "--name", "HAL-9000"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GPT-4"), "{stderr}");
}

#[test]
fn catalog_lists_reference_names_in_order() {
    let output = ci(&["catalog"]);
    assert!(output.status.success(), "{output:?}");
    let names: Vec<String> = stdout(&output)
        .lines()
        .filter_map(|line| line.split('\t').next().map(str::to_string))
        .collect();
    assert_eq!(
        names,
        ["ORION-Active-Inference", "GPT-4", "C-elegans-302-neurons", "Thermostat"]
    );
}

#[test]
fn sensitivity_emits_one_entry_per_indicator() {
    let output = ci(&["sensitivity", "--name", "GPT-4"]);
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    let contributions: Value = serde_json::from_str(&text).expect("json");
    let map = contributions.as_object().expect("object");
    assert_eq!(map.len(), 13);
    assert_eq!(map["RPT-1"], 0.0);

    let position = |id: &str| text.find(&format!("\"{id}\"")).expect("indicator key");
    let ids = ["RPT-1", "RPT-2", "GWT-1", "HOT-1", "PP-2", "AST-1", "AST-2"];
    for pair in ids.windows(2) {
        assert!(position(pair[0]) < position(pair[1]), "{pair:?} out of battery order");
    }
}

#[test]
fn demo_history_verifies_and_detects_tampering() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = ci(&["demo", "--out", dir.path().to_str().expect("path")]);
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    assert!(text.contains("COMPARATIVE REPORT"));
    assert!(text.contains("THEORY COMPARISON:"));

    let history = dir.path().join("history.json");
    let output = ci(&["verify", "--history", history.to_str().expect("path")]);
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).starts_with("chain ok: 4 entries"));

    let mut entries: Value =
        serde_json::from_str(&fs::read_to_string(&history).expect("read history")).expect("json");
    entries[2]["credence"] = Value::from(0.9);
    fs::write(&history, entries.to_string()).expect("rewrite history");
    let output = ci(&["verify", "--history", history.to_str().expect("path")]);
    assert!(!output.status.success());
}

#[test]
fn compare_accepts_a_custom_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"blank": {"metadata": {"name": "Blank"}}, "loop": {"metadata": {"name": "Loop"}, "architecture": {"has_recurrent_connections": true, "recurrence_depth": 10, "feedback_loop_count": 5}}}"#,
    )
    .expect("write catalog");
    let output = ci(&["compare", "--catalog", path.to_str().expect("path")]);
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    let loop_rank = text.find("1     Loop").expect("loop ranked first");
    let blank_rank = text.find("2     Blank").expect("blank ranked second");
    assert!(loop_rank < blank_rank);
}
