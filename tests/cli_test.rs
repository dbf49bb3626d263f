/// CLI integration tests
///
/// These tests run the compiled binary against transcripts in temporary directories
mod common;

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use common::{TranscriptDirBuilder, realistic_transcript};
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ai-transcript-explorer"))
}

#[test]
fn test_cli_no_command_shows_help_message() {
    bin().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("coding-assistant session transcripts"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("sections"));
}

#[test]
fn test_cli_version_flag() {
    bin().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    bin().arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_parse_to_stdout() {
    let dir = TranscriptDirBuilder::new().with_file("session.txt", &realistic_transcript());

    bin()
        .arg("parse")
        .arg(dir.file_path("session.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""projectPath":"/Users/alice/work/payments-api""#))
        .stdout(predicate::str::contains(r#""filesModified":3"#));
}

#[test]
fn test_cli_parse_to_output_file() {
    let dir = TranscriptDirBuilder::new().with_file("session.txt", &realistic_transcript());
    let output = dir.file_path("session.json");

    bin()
        .arg("parse")
        .arg(dir.file_path("session.txt"))
        .arg("--output")
        .arg(&output)
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["sections"].as_array().unwrap().len(), 2);
    assert_eq!(json["model"], "Claude Sonnet");
}

#[test]
fn test_cli_parse_missing_input_fails() {
    bin()
        .arg("parse")
        .arg("/nonexistent/session.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open transcript"));
}

#[test]
fn test_cli_parse_unwritable_output_fails() {
    let dir = TranscriptDirBuilder::new().with_file("session.txt", "> hi\n");

    bin()
        .arg("parse")
        .arg(dir.file_path("session.txt"))
        .arg("-o")
        .arg(dir.file_path("missing-dir/out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write output"));
}

#[test]
fn test_cli_parse_oversized_input_fails() {
    let dir = TranscriptDirBuilder::new().with_file("session.txt", &"> hi\n".repeat(100));

    bin()
        .arg("parse")
        .arg(dir.file_path("session.txt"))
        .arg("--max-file-size")
        .arg("64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File too large"));
}

#[test]
fn test_cli_parse_keep_empty_sections_flag() {
    let dir = TranscriptDirBuilder::new().with_file("code.txt", "```python\nprint(1)\n```\n");

    bin()
        .arg("parse")
        .arg(dir.file_path("code.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""sections":[]"#));

    bin()
        .arg("parse")
        .arg(dir.file_path("code.txt"))
        .arg("--keep-empty-sections")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""code":"print(1)""#));
}

#[test]
fn test_cli_stats_single_transcript() {
    let dir = TranscriptDirBuilder::new().with_file("session.txt", &realistic_transcript());

    bin()
        .arg("stats")
        .arg(dir.file_path("session.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcripts: 1 (0 failed)"))
        .stdout(predicate::str::contains("Model: Claude Sonnet"))
        .stdout(predicate::str::contains("Total messages: 15"))
        .stdout(predicate::str::contains("Files touched: 3"))
        .stdout(predicate::str::contains("Top emoji: 🎉 x2"));
}

#[test]
fn test_cli_stats_directory() {
    let dir = TranscriptDirBuilder::new()
        .with_file("a.txt", "> hello\n● hi\n")
        .with_file("nested/b.log", "> again\n● Read(x.rs)\n")
        .with_file("ignored.json", "{}");

    bin()
        .arg("stats")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcripts: 2 (0 failed)"))
        .stdout(predicate::str::contains("Total messages: 4"))
        .stdout(predicate::str::contains("Top emoji: none"));
}

#[test]
fn test_cli_stats_partial_failure_warns() {
    let dir = TranscriptDirBuilder::new()
        .with_file("a.txt", "> one\n")
        .with_file("b.txt", "> two\n")
        .with_bytes("c.txt", &[0xFF, 0xFE]);

    bin()
        .arg("stats")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcripts: 2 (1 failed)"))
        .stderr(predicate::str::contains("Failed to parse transcript"));
}

#[test]
fn test_cli_stats_mostly_corrupted_fails() {
    let dir = TranscriptDirBuilder::new()
        .with_file("a.txt", "> one\n")
        .with_bytes("b.txt", &[0xFF])
        .with_bytes("c.txt", &[0xFE]);

    bin()
        .arg("stats")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Batch parsing failed"));
}

#[test]
fn test_cli_stats_requires_path() {
    bin().arg("stats").assert().failure();
}

#[test]
fn test_cli_sections_listing() {
    let dir = TranscriptDirBuilder::new().with_file("session.txt", &realistic_transcript());

    bin()
        .arg("sections")
        .arg(dir.file_path("session.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  1. Why is the refund endpoint returning (9 messages, 1 code blocks, 3 file changes)",
        ))
        .stdout(predicate::str::contains(
            "  2. Can you commit this and open (6 messages, 0 code blocks, 3 file changes)",
        ));
}

#[test]
fn test_cli_sections_empty_transcript() {
    let dir = TranscriptDirBuilder::new().with_file("empty.txt", "");

    bin()
        .arg("sections")
        .arg(dir.file_path("empty.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No sections found"));
}
