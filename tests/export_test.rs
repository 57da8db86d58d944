use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_export_writes_spreadsheet() {
    let dir = tempdir().unwrap();
    let transcript =
        common::transcript(&["Nasi Goreng - 15000", "Es Teh - 5000", "/savelaporan"]);

    let mut cmd = Command::new(cargo_bin!("tallybot"));
    cmd.arg("console")
        .arg(transcript.path())
        .arg("--export-dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("📎 income_report.csv"));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(dir.path().join("income_report.csv"))
        .expect("Failed to open export");

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers, vec!["No", "Item", "Amount (Rp)"]);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], vec!["1", "Nasi Goreng", "15000"]);
    assert_eq!(records[1], vec!["2", "Es Teh", "5000"]);
    assert_eq!(records[2], vec!["", "", ""]);
    assert_eq!(records[3], vec!["", "TOTAL", "20000"]);
}

#[test]
fn test_export_with_empty_ledger_writes_nothing() {
    let dir = tempdir().unwrap();
    let transcript = common::transcript(&["/export"]);

    let mut cmd = Command::new(cargo_bin!("tallybot"));
    cmd.arg("console")
        .arg(transcript.path())
        .arg("--export-dir")
        .arg(dir.path())
        .args(["--export-file-name", "report.csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("📭 No data to export yet."));

    assert!(!dir.path().join("report.csv").exists());
}
