//! End-to-end tests of the commentscope binary.

mod common;

use assert_cmd::Command;
use common::{write_fixture, SAMPLE_COMMENTS};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary run from `dir`, isolated from the user's environment.
fn commentscope(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commentscope").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("COMMENTSCOPE_CONFIG")
        .env_remove("COMMENTSCOPE_TOXIC_THRESHOLD")
        .env_remove("COMMENTSCOPE_SCREAM_THRESHOLD")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is not valid JSON")
}

#[test]
fn test_report_json() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let json = stdout_json(commentscope(dir.path()).args(["report", "chat.json", "--format", "json"]));

    assert_eq!(json["metadata"]["total_comments"], 6);
    assert_eq!(json["metadata"]["toxic_threshold"], 0.7);
    assert_eq!(json["toxic_type_counts"]["toxicity"], 2);
    assert_eq!(json["sentiment_counts"]["NEG"], 2);
    assert_eq!(json["screaming_comments"], 2);
    assert!(json["peaks"].as_array().is_some_and(|p| !p.is_empty()));
}

#[test]
fn test_report_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    commentscope(dir.path())
        .args(["report", "chat.json", "-f", "markdown", "-o", "report.md"])
        .assert()
        .success();

    let markdown = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(markdown.starts_with("# Comment Analysis Report"));
    assert!(markdown.contains("| Insult | 2 |"));
}

#[test]
fn test_toxic_filter_respects_threshold_flag() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let strict = stdout_json(commentscope(dir.path()).args([
        "toxic", "filter", "chat.json", "--type", "insult", "--format", "json",
    ]));
    assert_eq!(strict.as_array().map(Vec::len), Some(2));

    let lenient = stdout_json(commentscope(dir.path()).args([
        "--threshold", "0.9", "toxic", "filter", "chat.json", "--type", "insult", "--format", "json",
    ]));
    let messages: Vec<_> = lenient
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages, vec!["you are an idiot"]);
}

#[test]
fn test_toxic_filter_unknown_type_fails() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let output = commentscope(dir.path())
        .args(["toxic", "filter", "chat.json", "--type", "rudeness"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&output).contains("rudeness"));
}

#[test]
fn test_toxic_counts_summary() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let json = stdout_json(commentscope(dir.path()).args(["toxic", "counts", "chat.json", "-f", "json"]));
    assert_eq!(json["counts"]["insult"], 2);
    assert!(json["counts"].get("threat").is_none());
    assert!((json["metrics"]["toxic_ratio"].as_f64().unwrap() - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_scream_annotate_rewrites_file_and_keeps_extra_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let output = commentscope(dir.path())
        .args(["scream", "annotate", "chat.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8_lossy(&output).contains("Annotated 6 comments"));

    let rewritten: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = rewritten.as_array().unwrap();
    assert_eq!(records[1]["scream_index"], 1.0);
    assert_eq!(records[0]["scream_index"], 0.0);
    assert_eq!(records[4]["badge"], "subscriber");

    let mean = stdout_json(commentscope(dir.path()).args(["scream", "mean", "chat.json", "-f", "json"]));
    assert!((mean["metrics"]["mean_scream_index"].as_f64().unwrap() - 2.0 / 6.0).abs() < 1e-9);
}

#[test]
fn test_partitions_and_peaks() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let partitions =
        stdout_json(commentscope(dir.path()).args(["partitions", "chat.json", "-n", "3", "-f", "json"]));
    let partitions = partitions.as_array().unwrap();
    assert_eq!(partitions.len(), 3);
    let total: usize = partitions
        .iter()
        .map(|p| p["comments"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 6);

    let peaks = stdout_json(commentscope(dir.path()).args([
        "peaks", "chat.json", "--label", "NEG", "--window", "120", "--top", "1", "-f", "json",
    ]));
    assert_eq!(peaks["label"], "NEG");
    assert_eq!(peaks["peaks"][0]["start"], 485);
    assert_eq!(peaks["peaks"][0]["ratio"], 1.0);
}

#[test]
fn test_terminal_report_is_plain_with_no_color() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let output = commentscope(dir.path())
        .args(["sentiment", "chat.json", "--plain"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Sentiment"));
    assert!(text.contains("negativity_percentage: 33.333"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = commentscope(dir.path())
        .args(["report", "missing.json"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("Failed to load comments from missing.json"));
}

#[test]
fn test_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "broken.json", "[{\"message\": \"hi\",]");

    commentscope(dir.path())
        .args(["report", "broken.json"])
        .assert()
        .failure();
}

#[test]
fn test_init_then_config_is_used() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    commentscope(dir.path()).arg("init").assert().success();
    commentscope(dir.path()).arg("init").assert().failure();
    commentscope(dir.path()).args(["init", "--force"]).assert().success();

    let config_path = dir.path().join(".commentscope.toml");
    let config = fs::read_to_string(&config_path)
        .unwrap()
        .replace("toxicity = 0.7", "toxicity = 0.9");
    fs::write(&config_path, config).unwrap();

    let json = stdout_json(commentscope(dir.path()).args(["report", "chat.json", "-f", "json"]));
    assert_eq!(json["metadata"]["toxic_threshold"], 0.9);
    assert_eq!(json["toxic_type_counts"]["insult"], 1);
}

#[test]
fn test_invalid_config_value_is_reported() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);
    write_fixture(dir.path(), "bad.toml", "[peaks]\nwindow_seconds = 0\n");

    let output = commentscope(dir.path())
        .args(["--config", "bad.toml", "peaks", "chat.json"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&output).contains("peaks.window_seconds"));
}

#[test]
fn test_oversized_peak_window_is_an_error_not_a_crash() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let output = commentscope(dir.path())
        .args(["peaks", "chat.json", "--window", "18446744073709551615"])
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("Failed to detect peak windows"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_partition_count_above_limit_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "chat.json", SAMPLE_COMMENTS);

    let output = commentscope(dir.path())
        .args(["partitions", "chat.json", "-n", "1000000000"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&output).contains("partitions.count"));
}
