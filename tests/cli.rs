use std::{fs, process::Command};

fn complaints() -> Command {
    Command::new(env!("CARGO_BIN_EXE_complaints"))
}

#[test]
fn binary_writes_report_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.csv");
    let status = complaints()
        .arg("testdata/complaints.csv")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());
    let report = fs::read_to_string(&output).unwrap();
    assert_eq!(report.lines().count(), 7);
    assert!(report.contains("Debt collection,2019,3,2,67\n"));
}

#[test]
fn binary_fails_on_header_only_input_without_writing_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.csv");
    let out = complaints()
        .arg("testdata/empty.csv")
        .arg(&output)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no complaints"));
    assert!(!output.exists());
}

#[test]
fn binary_names_malformed_date() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.csv");
    let out = complaints()
        .arg("testdata/bad_date.csv")
        .arg(&output)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("\"19-09-24\""));
    assert!(!output.exists());
}

#[test]
fn binary_prints_table_with_groups() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.csv");
    let out = complaints()
        .args(["--groups", "testdata/groups", "--print", "testdata/complaints.csv"])
        .arg(&output)
        .output()
        .unwrap();
    assert!(out.status.success());
    let table = String::from_utf8(out.stdout).unwrap();
    assert!(table.starts_with("Product"));
    assert!(!table.contains("credit repair services"));
}
