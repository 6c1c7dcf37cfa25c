use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

mod fixtures;

#[test]
fn test_pages_lists_catalog_in_order() {
    let home = tempdir().unwrap();

    let output = cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("pages")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], " 1. Intro page");
    assert_eq!(lines[3], " 4. Most Popular Bike Routes");
    assert_eq!(lines[6], " 7. Recommendations");
}

#[test]
fn test_dashboard_needs_a_terminal() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    fixtures::write_dataset(root.path());

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("--root")
        .arg(root.path())
        .arg("dashboard")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires a terminal"));
}

#[test]
fn test_dashboard_fails_before_rendering_without_data() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("--root")
        .arg(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load the trip sample"));
}
