use std::io::Write;
use std::process::{Command, Output};

fn latency_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_latency-stats"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_json_output_for_example_file() {
    let file = latency_file("0.010\n0.020\n\n0.030\n0.040\n");
    let out = run(&[file.path().as_os_str()]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "{\n  \"count\": 4,\n  \"min\": 10.0,\n  \"max\": 40.0,\n  \"mean\": 25.0,\n  \"median\": 30.0,\n  \"p95\": 40.0,\n  \"p99\": 40.0\n}\n"
    );
}

#[test]
fn test_text_output() {
    let file = latency_file("0.010\n0.020\n0.030\n0.040\n");
    let out = run(&[file.path().as_os_str(), "--text".as_ref()]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Samples: 4\n"));
    assert!(stdout.contains("p50 30.00 p95 40.00 p99 40.00 ms"));
}

#[test]
fn test_export_json_matches_stdout() {
    let file = latency_file("0.5\n0.25\n");
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("stats.json");
    let out = run(&[
        file.path().as_os_str(),
        "--export-json".as_ref(),
        export.as_os_str(),
    ]);

    assert!(out.status.success());
    let exported = std::fs::read_to_string(&export).unwrap();
    assert_eq!(exported, String::from_utf8(out.stdout).unwrap());
}

#[test]
fn test_missing_argument_prints_usage() {
    let out = run(&[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let out = run(&[path.as_os_str()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("nope.txt"));
}

#[test]
fn test_blank_only_file_reports_empty_data() {
    let file = latency_file("\n   \n\n");
    let out = run(&[file.path().as_os_str()]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("no latency samples found"));
}

#[test]
fn test_invalid_value_reports_line() {
    let file = latency_file("0.1\nslow\n");
    let out = run(&[file.path().as_os_str()]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("slow"));
}

#[test]
fn test_out_of_range_value_fails_instead_of_null() {
    let file = latency_file("1e306\n0.1\n");
    let out = run(&[file.path().as_os_str()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("out of range"));
}

#[test]
fn test_cr_only_line_endings() {
    let file = latency_file("0.010\r0.020\r0.030\r0.040\r");
    let out = run(&[file.path().as_os_str()]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\"count\": 4"));
    assert!(stdout.contains("\"median\": 30.0"));
}
