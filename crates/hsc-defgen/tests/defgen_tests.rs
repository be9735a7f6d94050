//! End-to-end tests for the hsc-defgen binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DESCRIPTION: &str = r#"{
    "functions": [
        {"name": "sleep", "type": "void", "engines": {"xbox": 22},
         "parameters": [{"type": "short"}, {"type": "script", "optional": true}]}
    ],
    "globals": [{"name": "gravity", "type": "real", "engines": {"xbox": 3, "mcc-cea": null}}]
}"#;

fn defgen() -> Command {
    Command::cargo_bin("hsc-defgen").unwrap()
}

#[test]
fn generates_a_table_module_with_search() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("definitions.json");
    let output = dir.path().join("definitions_generated.rs");
    fs::write(&input, DESCRIPTION).unwrap();

    defgen().arg(&input).arg(&output).assert().success();

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("pub static DEFINITIONS: &[BuiltinDefinition]"));
    assert!(generated.contains("pub fn builtin_definition_search"));
    assert!(generated.contains("Cow::Borrowed(\"gravity\")"));
}

#[test]
fn table_only_omits_the_search_routine() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("definitions.json");
    let output = dir.path().join("definitions_generated.rs");
    fs::write(&input, DESCRIPTION).unwrap();

    defgen()
        .arg(&input)
        .arg(&output)
        .arg("--table-only")
        .assert()
        .success();

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("pub static DEFINITIONS: &[BuiltinDefinition]"));
    assert!(!generated.contains("builtin_definition_search"));
}

#[test]
fn check_mode_accepts_fresh_and_rejects_stale_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("definitions.json");
    let output = dir.path().join("definitions_generated.rs");
    fs::write(&input, DESCRIPTION).unwrap();

    defgen().arg(&input).arg(&output).assert().success();
    defgen()
        .arg(&input)
        .arg(&output)
        .arg("--check")
        .assert()
        .success();

    fs::write(&output, "// stale\n").unwrap();
    defgen()
        .arg(&input)
        .arg(&output)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn invalid_description_fails_without_writing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("definitions.json");
    let output = dir.path().join("definitions_generated.rs");
    // Duplicate name across the merged set
    fs::write(
        &input,
        r#"{
            "functions": [{"name": "foo", "type": "long", "engines": {}}],
            "globals": [{"name": "foo", "type": "real", "engines": {}}]
        }"#,
    )
    .unwrap();

    defgen()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("foo"));
    assert!(!output.exists());
}
