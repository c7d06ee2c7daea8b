//! Integration tests for the analyze command
//!
//! Each test writes a dependency fixture and verifies the reported paths and
//! classifications end to end.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Get a Command for deptrace
fn deptrace() -> Command {
    cargo_bin_cmd!("deptrace")
}

fn write_deps(dir: &Path, records: &str) {
    fs::write(dir.join("deps.txt"), records).unwrap();
}

fn analyze(dir: &Path) -> assert_cmd::assert::Assert {
    deptrace()
        .current_dir(dir)
        .args(["analyze", "deps.txt"])
        .assert()
}

// ============================================================================
// Scenario coverage
// ============================================================================

#[test]
fn test_simple_chain() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nB -> C\n");

    analyze(dir.path())
        .success()
        .stdout(predicate::str::contains("Paths found: 1"))
        .stdout(predicate::str::contains("No circular dependency:"))
        .stdout(predicate::str::contains("A -> B -> C (No loop detected)"));
}

#[test]
fn test_pure_loop() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nB -> A\n");

    analyze(dir.path())
        .success()
        .stdout(predicate::str::contains("Paths found: 1"))
        .stdout(predicate::str::contains("Circular dependency detected:"))
        .stdout(predicate::str::contains("A -> B -> A (Pure loop)"));
}

#[test]
fn test_pass_through_loop() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nB -> C\nC -> B\n");

    analyze(dir.path())
        .success()
        .stdout(predicate::str::contains("Paths found: 1"))
        .stdout(predicate::str::contains(
            "A -> B -> C -> B (Contains a loop)",
        ));
}

#[test]
fn test_empty_input_prints_only_count() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "");

    analyze(dir.path())
        .success()
        .stdout(predicate::eq("Paths found: 0\n"));
}

#[test]
fn test_branching_without_cycle() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nA -> C\n");

    analyze(dir.path())
        .success()
        .stdout(predicate::str::contains("Paths found: 2"))
        .stdout(predicate::str::contains("A -> B (No loop detected)"))
        .stdout(predicate::str::contains("A -> C (No loop detected)"));
}

// ============================================================================
// Report layout
// ============================================================================

#[test]
fn test_loop_section_orders_pure_before_contains() {
    let dir = tempdir().unwrap();
    // E's walk passes through the D-C loop; A closes a pure loop.
    write_deps(dir.path(), "A -> B\nB -> A\nC -> D\nD -> C\nE -> D\n");

    let output = analyze(dir.path()).success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let pure = stdout.find("(Pure loop)").unwrap();
    let contains = stdout.find("(Contains a loop)").unwrap();
    assert!(pure < contains, "pure loops print before pass-throughs");
    assert_eq!(stdout.matches("Circular dependency detected:").count(), 1);
}

#[test]
fn test_acyclic_section_precedes_loop_section() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nC -> D\nD -> C\n");

    let output = analyze(dir.path()).success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let acyclic = stdout.find("No circular dependency:").unwrap();
    let looping = stdout.find("Circular dependency detected:").unwrap();
    assert!(acyclic < looping);
}

// ============================================================================
// Record handling
// ============================================================================

#[test]
fn test_malformed_records_are_skipped() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nnot a valid record line\nB ->\nB -> C\n");

    analyze(dir.path())
        .success()
        .stdout(predicate::str::contains("Paths found: 1"))
        .stdout(predicate::str::contains("A -> B -> C (No loop detected)"));
}

#[test]
fn test_duplicate_records_produce_duplicate_paths() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nA -> B\n");

    analyze(dir.path())
        .success()
        .stdout(predicate::str::contains("Paths found: 2"));
}

// ============================================================================
// JSON format
// ============================================================================

#[test]
fn test_json_report_envelope() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "A -> B\nB -> A\n");

    deptrace()
        .current_dir(dir.path())
        .args(["--format", "json", "analyze", "deps.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"paths_found\":1"))
        .stdout(predicate::str::contains("[\"A\",\"B\",\"A\"]"));
}

#[test]
fn test_json_report_empty_graph() {
    let dir = tempdir().unwrap();
    write_deps(dir.path(), "");

    deptrace()
        .current_dir(dir.path())
        .args(["--format", "json", "analyze", "deps.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"paths_found\":0"));
}
