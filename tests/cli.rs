//! Command-line behaviour of the graphlens binary

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn graph_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", value).unwrap();
    file
}

fn run(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_graphlens"));
    cmd.args(args)
        .env_remove("GRAPHLENS_MAX_NODES")
        .env_remove("GRAPHLENS_MAX_EDGES")
        .env_remove("GRAPHLENS_TIMEOUT");
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd.output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn chain_payload() -> Value {
    json!({
        "nodes": [
            {"id": 1, "label": "A"},
            {"id": 2, "label": "B"},
            {"id": 3, "label": "C"}
        ],
        "edges": [{"from": 1, "to": 2}, {"from": 2, "to": 3}]
    })
}

#[test]
fn test_analyze_prints_report() {
    let file = graph_file(&chain_payload());
    let config = NamedTempFile::new().unwrap();
    let output = run(
        &["analyze", file.path().to_str().unwrap(), "--config", config.path().to_str().unwrap()],
        &[],
    );

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["num_nodes"], json!(3));
    assert_eq!(report["longest_path_nodes"], json!(["A", "B", "C"]));
}

#[test]
fn test_analyze_invalid_graph_exits_nonzero() {
    let file = graph_file(&json!({
        "nodes": [{"id": 1, "label": "A"}],
        "edges": [{"from": 1, "to": 5}]
    }));
    let config = NamedTempFile::new().unwrap();
    let output = run(
        &["analyze", file.path().to_str().unwrap(), "--config", config.path().to_str().unwrap()],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    let error = stdout_json(&output);
    assert_eq!(error["success"], json!(false));
    assert_eq!(error["kind"], json!("validation"));
}

#[test]
fn test_env_limit_rejects_large_graph() {
    let file = graph_file(&chain_payload());
    let config = NamedTempFile::new().unwrap();
    let output = run(
        &["analyze", file.path().to_str().unwrap(), "--config", config.path().to_str().unwrap()],
        &[("GRAPHLENS_MAX_NODES", "2")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["kind"], json!("resource_limit"));
}

#[test]
fn test_config_file_limit_applies() {
    let file = graph_file(&chain_payload());
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "max_edges: 1").unwrap();
    let output = run(
        &["analyze", file.path().to_str().unwrap(), "--config", config.path().to_str().unwrap()],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["kind"], json!("resource_limit"));
}

#[test]
fn test_validate_reports_summary() {
    let file = graph_file(&chain_payload());
    let config = NamedTempFile::new().unwrap();
    let output = run(
        &["validate", file.path().to_str().unwrap(), "--config", config.path().to_str().unwrap()],
        &[],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"valid": true, "num_nodes": 3, "num_edges": 2})
    );
}
