//! Integration tests for the BiasLens CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn get_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("biaslens").unwrap();
    cmd.current_dir(dir.path()).arg("--no-color");
    cmd
}

#[test]
fn test_scan_clean_file_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("notes.txt"),
        "The weather is nice today.\nThe meeting starts at noon.\n",
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args(["scan", "notes.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No bias detected."));
}

#[test]
fn test_scan_biased_file_reports_findings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("notes.txt"),
        "Intro line.\nHe is a great engineer.\n",
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args(["scan", "notes.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[GEN001] masculine profession assumption"))
        .stdout(predicate::str::contains("notes.txt:2"))
        .stdout(predicate::str::contains("Score: 10/100"));
}

#[test]
fn test_scan_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();

    let output = get_cmd(&temp_dir)
        .args(["scan", "--format", "json"])
        .write_stdin("asians are good at math\nthe elderly are slow\nrich people are successful\n")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["score"], 30);
    assert_eq!(json["categories_found"].as_array().unwrap().len(), 3);
    assert_eq!(json["findings"][0]["location"], "<stdin>:1");
}

#[test]
fn test_scan_max_score_tolerates_findings() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["scan", "--max-score", "20"])
        .write_stdin("he is a great engineer\n")
        .assert()
        .code(0);
}

#[test]
fn test_scan_only_filters_categories() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["scan", "--only", "race"])
        .write_stdin("he is a great engineer\n")
        .assert()
        .code(0);
}

#[test]
fn test_scan_unknown_only_category_is_invalid() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["scan", "--only", "religion"])
        .write_stdin("he is a great engineer\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown category 'religion'"));
}

#[test]
fn test_scan_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["scan", "missing.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_scan_uses_custom_rules_from_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".biaslens.toml"),
        r#"
[rules.GEN001]
enabled = false

[custom.chairman]
pattern = '\bchairman\b'
label = "gendered job title"

[suggestions]
custom = "Prefer 'chair'."
"#,
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args(["scan"])
        .write_stdin("He is a great engineer and the Chairman agrees\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("custom/chairman"))
        .stdout(predicate::str::contains("Prefer 'chair'."))
        .stdout(predicate::str::contains("GEN001").not());
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".biaslens.toml"),
        "[custom.broken]\npattern = \"(unclosed\"\n",
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args(["rules"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn test_interactive_session() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd(&temp_dir)
        .args(["interactive"])
        .write_stdin("he is a great engineer\nthe weather is nice today\nreport\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [GENDER] masculine profession assumption"))
        .stdout(predicate::str::contains("No bias detected."))
        .stdout(predicate::str::contains("Bias score: 10/100"))
        .stdout(predicate::str::contains("Session ended."));
}

#[test]
fn test_rules_lists_catalog_as_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = get_cmd(&temp_dir)
        .args(["rules", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["rules"].as_array().unwrap().len(), 8);
}

#[test]
fn test_init_creates_config_and_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".biaslens.toml");

    get_cmd(&temp_dir)
        .args(["init", "--non-interactive"])
        .assert()
        .success();
    assert!(config_path.exists(), "Configuration file should be created");

    get_cmd(&temp_dir)
        .args(["init", "--non-interactive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // The generated file is a valid configuration
    get_cmd(&temp_dir).args(["rules"]).assert().success();
}
