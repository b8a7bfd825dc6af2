//! Integration tests for the eegscan binary
//!
//! Tests the full path: file or stdin → CLI → stdout / exit status / saved report

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use eegscan::core::load_report;
use eegscan::types::ScanReason;

const SESSION: &str = "\
AA AA 0C 02 00 04 50 05 46 00 00 00 00 00 00 00
AA AA 0C 02 C8 04 46 05 50 00 00 00 00 00 00 00
AA AA 0C 02 00 04 48 05 4A 00 00 00 00 00 00 00
AA AA 08 04 40 05 4B 00 00 00 00 00 00 00 00 00
";

const SINGLE_PACKET: &str = "AA AA 04 04 50 00 00 00 00 00\n";

fn eegscan() -> Command {
    Command::new(env!("CARGO_BIN_EXE_eegscan"))
}

fn write_input(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = eegscan()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Nothing decodable: exit 2 with the expected-format hint
#[test]
fn test_no_data_exit_status_and_hint() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "noise.txt", "hello\naa aa 04 04 50 00 00 00 00 00\n");

    let output = eegscan().arg(&input).arg("--no-color").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Could not decode any data"), "stdout: {}", stdout);
    assert!(stdout.contains("AA AA 20 02 50 83 18"), "stdout: {}", stdout);
}

/// Unreadable input: exit 1 with an error on stderr
#[test]
fn test_missing_file_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let output = eegscan().arg(&missing).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.txt"), "stderr: {}", stderr);
}

/// "-" reads stdin
#[test]
fn test_dash_reads_stdin() {
    let output = run_with_stdin(&["-", "--no-color"], SINGLE_PACKET);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Records decoded: 1"), "stdout: {}", stdout);
    assert!(stdout.contains("avg=80.00"), "stdout: {}", stdout);
}

/// No path also reads stdin
#[test]
fn test_no_path_reads_stdin() {
    let output = run_with_stdin(&["--json"], SINGLE_PACKET);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "stdin");
    assert_eq!(json["timeline"][0]["attention"], 80);
}

/// --no-color keeps the full summary: min/max, quality and interpretation
#[test]
fn test_no_color_prints_full_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "session.txt", SESSION);

    let output = eegscan().arg(&input).arg("--no-color").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(!stdout.contains('\x1b'), "unexpected ANSI escape: {:?}", stdout);
    assert!(stdout.contains("Records decoded: 4"), "stdout: {}", stdout);
    assert!(stdout.contains("avg=71.50 min=64 max=80 [HIGH]"), "stdout: {}", stdout);
    assert!(stdout.contains("75.0% good (1 poor of 4 records)"), "stdout: {}", stdout);
    assert!(stdout.contains("relaxed but focused"), "stdout: {}", stdout);
}

/// --oneline prints the single parseable summary line
#[test]
fn test_oneline_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "session.txt", SESSION);

    let output = eegscan().arg(&input).arg("--oneline").arg("--no-color").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output).trim_end(),
        "records=4 | attention_avg=71.50 | meditation_avg=74.75 | quality_good=75.0% \
         | attention_level=HIGH | meditation_level=HIGH"
    );
}

/// --output writes a report that loads back
#[test]
fn test_output_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "session.txt", SESSION);
    let report_path = dir.path().join("out").join("report.json");

    let output = eegscan()
        .arg(&input)
        .arg("--no-color")
        .arg("--output")
        .arg(&report_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = load_report(&report_path).unwrap();
    assert_eq!(report.source, input.display().to_string());
    assert_eq!(report.reason, ScanReason::R101_RECORDS_DECODED);
    assert_eq!(report.timeline.len(), 4);
}

/// A zero or non-numeric sample rate is rejected before any scan
#[test]
fn test_invalid_sample_rate_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "packet.txt", SINGLE_PACKET);

    for rate in ["0", "-5", "inf", "fast"] {
        let output = eegscan()
            .arg(&input)
            .arg("--json")
            .arg(format!("--sample-rate={}", rate))
            .output()
            .unwrap();

        assert!(!output.status.success(), "rate {} accepted", rate);
        assert!(output.stdout.is_empty(), "rate {} produced output", rate);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("sample-rate"), "stderr: {}", stderr);
    }
}

/// A valid custom sample rate reaches the report unchanged
#[test]
fn test_custom_sample_rate_kept() {
    let output = run_with_stdin(&["--json", "--sample-rate", "4"], SINGLE_PACKET);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["sample_rate_hz"], 4.0);
}
