use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

mod fixtures;

#[test]
fn test_check_summarizes_dataset() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    fixtures::write_dataset(root.path());
    fs::write(root.path().join("Data/top_20.csv"), fixtures::TOP_20_CSV).unwrap();

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("--root")
        .arg(root.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trips sample: 4 rows"))
        .stdout(predicate::str::contains("Weather: 3 days (2022-01-01 to 2022-01-03)"))
        .stdout(predicate::str::contains("Top stations: 2 rows"))
        .stdout(predicate::str::contains("Map routes.html"))
        .stdout(predicate::str::contains("Pages: 7 rendered"))
        // No images in the fixture.
        .stdout(predicate::str::contains("OK with 3 warning(s)"))
        .stderr(predicate::str::contains("season_annotated.png"));
}

#[test]
fn test_check_reports_missing_optional_table() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    fixtures::write_dataset(root.path());

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("--root")
        .arg(root.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top stations: missing"))
        .stdout(predicate::str::contains("OK with 4 warning(s)"));
}

#[test]
fn test_check_fails_on_missing_map() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    fixtures::write_dataset(root.path());
    fs::remove_file(root.path().join("visualisations/routes.html")).unwrap();

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("--root")
        .arg(root.path())
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("routes.html"));
}

#[test]
fn test_check_fails_on_schema_mismatch() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    fixtures::write_dataset(root.path());
    fs::write(
        root.path().join("Data/df_weather.csv"),
        "day,temp\n2022-01-01,3.0\n",
    )
    .unwrap();

    cargo_bin_cmd!("citidash")
        .env("CITIDASH_HOME", home.path())
        .arg("--root")
        .arg(root.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("weather"));
}
