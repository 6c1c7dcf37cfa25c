use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

mod fixtures;

#[test]
fn test_extract_into_default_target() {
    let home = tempdir().unwrap();
    let source = tempdir().unwrap();
    fixtures::write_zip(
        &source.path().join("202201.zip"),
        &[
            ("202201-citibike-tripdata_1.csv", "a,b\n1,2\n"),
            ("__MACOSX/._202201-citibike-tripdata_1.csv", "junk"),
            ("notes.txt", "ignored"),
        ],
    );
    fixtures::write_zip(&source.path().join("202202.zip"), &[("trips.csv", "c\n3\n")]);

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("extract")
        .arg("--source")
        .arg(source.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 file(s) from 2 archive(s)"));

    let target = source.path().join("extracted_data");
    assert_eq!(
        fs::read_to_string(target.join("202201-citibike-tripdata_1.csv")).unwrap(),
        "a,b\n1,2\n"
    );
    assert_eq!(
        fs::read_to_string(target.join("202202_trips.csv")).unwrap(),
        "c\n3\n"
    );
    assert_eq!(fs::read_dir(&target).unwrap().count(), 2);
}

#[test]
fn test_extract_skips_bad_archive_and_continues() {
    let home = tempdir().unwrap();
    let source = tempdir().unwrap();
    let target = tempdir().unwrap();
    fs::write(source.path().join("202201.zip"), b"not a zip").unwrap();
    fixtures::write_zip(&source.path().join("202203.zip"), &[("trips.csv", "x\n")]);

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("extract")
        .arg("--source")
        .arg(source.path())
        .arg("--target")
        .arg(target.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped"))
        .stderr(predicate::str::contains("202201.zip"))
        .stdout(predicate::str::contains("Extracted 1 file(s) from 1 archive(s)"));

    assert!(target.path().join("202203_trips.csv").exists());
}

#[test]
fn test_extract_missing_source_fails() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("extract")
        .arg("--source")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read source directory"));
}
