//! End-to-end CLI integration tests
//!
//! Each test runs the binary in a scratch directory with its own config
//! home, so no user configuration or personal dictionary leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

#[allow(deprecated)]
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    let home = tempdir().unwrap();
    cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("dict"));
}

#[test]
fn version_flag_shows_version() {
    let home = tempdir().unwrap();
    cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completion_script_is_generated() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("textanalyzer"));
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_reports_issues_and_fails() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["analyze", "--no-color", "--text", "привет привет"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("STYLE_REPETITION"))
        .stdout(predicate::str::contains("Quality: 95/100"));
}

#[test]
fn no_fail_exits_zero() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["analyze", "--no-color", "--no-fail", "--text", "привет привет"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 issue found in 1 input"));
}

#[test]
fn clean_text_passes() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["analyze", "--no-color", "--text", "Я хочу заказать пиццу. "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn json_output_has_one_report_per_input() {
    let home = tempdir().unwrap();
    let file = home.path().join("input.txt");
    fs::write(&file, "Я оформил заказ .").unwrap();

    let output = cmd(&home)
        .args(["analyze", "--format", "json", "--no-fail", "--text", "привет привет"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["inputs_checked"], 2);
    assert_eq!(json["reports"][0]["source"], file.display().to_string());
    assert_eq!(json["reports"][0]["punctuation"][0]["code"], "PUNC_SPACE_BEFORE");
    assert_eq!(json["reports"][0]["punctuation"][0]["position"], 15);
    assert_eq!(json["reports"][1]["source"], "<text 1>");
    assert_eq!(json["reports"][1]["style"][0]["severity"], 0.7);
}

#[test]
fn missing_file_is_skipped() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["analyze", "--no-color", "missing.txt", "--text", "Привет. "])
        .assert()
        .success()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn analyze_without_input_fails() {
    let home = tempdir().unwrap();
    cmd(&home)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input given"));
}

#[test]
fn unsupported_language_fails() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["--language", "en", "analyze", "--text", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn word_list_is_merged() {
    let home = tempdir().unwrap();
    let list = home.path().join("words.txt");
    fs::write(&list, "квокка\n").unwrap();

    cmd(&home)
        .args(["analyze", "--no-color", "--text", "квокка"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ORPH_UNKNOWN_WORD"));

    cmd(&home)
        .arg("--word-list")
        .arg(&list)
        .args(["analyze", "--no-color", "--text", "квокка"])
        .assert()
        .success();
}

#[test]
fn local_config_file_is_read() {
    let home = tempdir().unwrap();
    fs::write(home.path().join(".textanalyzer.toml"), "pool_size = 0\n").unwrap();

    cmd(&home)
        .args(["analyze", "--text", "Привет"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pool_size must be at least 1"));
}

// =============================================================================
// Dict
// =============================================================================

#[test]
fn dict_add_persists_words() {
    let home = tempdir().unwrap();
    let personal = home.path().join("personal.txt");

    cmd(&home)
        .arg("--personal-dict")
        .arg(&personal)
        .args(["dict", "add", "Квокка"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: квокка"));

    cmd(&home)
        .arg("--personal-dict")
        .arg(&personal)
        .args(["dict", "add", "квокка"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already known: квокка"));

    assert_eq!(fs::read_to_string(&personal).unwrap(), "квокка\n");

    cmd(&home)
        .arg("--personal-dict")
        .arg(&personal)
        .args(["analyze", "--text", "квокка"])
        .assert()
        .success();
}

#[test]
fn dict_check_suggests_corrections() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["dict", "check", "привед"])
        .assert()
        .success()
        .stdout(predicate::str::contains("привед"))
        .stdout(predicate::str::contains("привет"));
}

#[test]
fn dict_size_grows_with_word_list() {
    let home = tempdir().unwrap();
    let list = home.path().join("words.txt");
    fs::write(&list, "квокка\nтюлень\n").unwrap();

    let base = cmd(&home).args(["dict", "size"]).output().unwrap();
    let grown = cmd(&home)
        .arg("--word-list")
        .arg(&list)
        .args(["dict", "size"])
        .output()
        .unwrap();

    let base: usize = String::from_utf8_lossy(&base.stdout).trim().parse().unwrap();
    let grown: usize = String::from_utf8_lossy(&grown.stdout).trim().parse().unwrap();
    assert_eq!(grown, base + 2);
}
