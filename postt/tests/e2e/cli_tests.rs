//! CLI Interface E2E Tests
//!
//! These tests verify the postt binary: help and version output, each
//! output format, stdin input, output directories and configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("Failed to read fixture")
}

/// postt running in `dir`, isolated from any user configuration and colour settings.
fn postt_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_postt"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("POSTT_CONFIG")
        .env_remove("POSTT_VERBOSE")
        .env_remove("POSTT_NO_COLOR")
        .env_remove("FORCE_COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Verifies that the --help flag displays help information
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("highlight")));
}

/// Verifies that the --version flag displays version information
#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("postt"));
}

#[test]
fn test_highlight_html_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .args(["highlight", "--format", "html"])
        .arg(fixture("greeter.py"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<span class=\"dec\">@functools.lru_cache</span>")
                .and(predicate::str::contains("<span class=\"fn\">greet</span>"))
                .and(predicate::str::contains("<span class=\"cls\">Greeter</span>"))
                .and(predicate::str::contains("<span class=\"slf\">self</span>"))
                .and(predicate::str::contains("&lt;name&gt;"))
                .and(predicate::str::contains("<span class=\"op\">**=</span>")),
        );
}

#[test]
fn test_highlight_html_standalone() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .args(["highlight", "--standalone", "-"])
        .write_stdin("pass")
        .assert()
        .success()
        .stdout("<pre class=\"posti\"><span class=\"kw\">pass</span></pre>\n");
}

#[test]
fn test_highlight_plain_reproduces_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .args(["highlight", "-F", "plain"])
        .arg(fixture("greeter.py"))
        .assert()
        .success()
        .stdout(read_fixture("greeter.py"));
}

#[test]
fn test_highlight_ansi_forced_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .env("FORCE_COLOR", "1")
        .args(["highlight", "-F", "ansi", "-"])
        .write_stdin("def f(): pass")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[95mdef\x1b[0m \x1b[1mf\x1b[0m"));
}

#[test]
fn test_highlight_ansi_no_color_is_plain() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .env("FORCE_COLOR", "1")
        .args(["--no-color", "highlight", "-F", "ansi"])
        .arg(fixture("greeter.py"))
        .assert()
        .success()
        .stdout(read_fixture("greeter.py"));
}

#[test]
fn test_highlight_ansi_piped_without_force_is_plain() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .args(["highlight", "-F", "ansi", "-"])
        .write_stdin("x = 1")
        .assert()
        .success()
        .stdout("x = 1");
}

#[test]
fn test_highlight_json_covers_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = postt_in(temp_dir.path())
        .args(["highlight", "-F", "json"])
        .arg(fixture("greeter.py"))
        .output()
        .expect("Failed to run postt");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let records = records.as_array().expect("a JSON array");

    let joined: String = records
        .iter()
        .map(|r| r["text"].as_str().expect("text field"))
        .collect();
    assert_eq!(joined, read_fixture("greeter.py"));
    assert_eq!(records[0]["kind"], "keyword");
    assert_eq!(records[0]["start"], 0);
}

#[test]
fn test_highlight_output_directory_and_force() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("out");

    postt_in(temp_dir.path())
        .args(["highlight", "-F", "html", "-o"])
        .arg(&out_dir)
        .arg(fixture("greeter.py"))
        .arg(fixture("unterminated.py"))
        .assert()
        .success();

    assert!(out_dir.join("greeter.html").exists());
    assert!(out_dir.join("unterminated.html").exists());

    postt_in(temp_dir.path())
        .args(["highlight", "-F", "html", "-o"])
        .arg(&out_dir)
        .arg(fixture("greeter.py"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    postt_in(temp_dir.path())
        .args(["highlight", "-F", "html", "--force", "-o"])
        .arg(&out_dir)
        .arg(fixture("greeter.py"))
        .assert()
        .success();
}

#[test]
fn test_highlight_output_names_must_be_distinct() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let nested = temp_dir.path().join("nested");
    std::fs::create_dir_all(&nested).expect("Failed to create directory");
    std::fs::write(nested.join("greeter.py"), "pass\n").expect("Failed to write input");
    let out_dir = temp_dir.path().join("out");

    postt_in(temp_dir.path())
        .args(["highlight", "-F", "plain", "--force", "-o"])
        .arg(&out_dir)
        .arg(fixture("greeter.py"))
        .arg(nested.join("greeter.py"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("same output file"));

    assert!(!out_dir.join("greeter.txt").exists());
}

#[test]
fn test_highlight_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .args(["highlight", "missing.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_highlight_unknown_format_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .args(["highlight", "-F", "pdf"])
        .arg(fixture("greeter.py"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_tokens_listing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .arg("tokens")
        .arg(fixture("greeter.py"))
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("keyword\t0\t\"import\"\n")
                .and(predicate::str::contains("function-name\t"))
                .and(predicate::str::contains("class-name\t"))
                .and(predicate::str::contains("number\t")),
        );
}

#[test]
fn test_tokens_unterminated_string_runs_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    postt_in(temp_dir.path())
        .arg("tokens")
        .arg(fixture("unterminated.py"))
        .assert()
        .success()
        .stdout(predicate::str::ends_with("string\t4\t\"\\\"unterminated\\ny = 1\\n\"\n"));
}

#[test]
fn test_init_config_then_use_it() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    postt_in(temp_dir.path())
        .arg("init-config")
        .assert()
        .success();
    let config_path = temp_dir.path().join("postt.toml");
    assert!(config_path.exists());

    postt_in(temp_dir.path())
        .arg("init-config")
        .assert()
        .failure();

    std::fs::write(&config_path, "format = \"ansi\"\n\n[theme]\nkeyword = \"4\"\n")
        .expect("Failed to write config");

    // picked up from the working directory
    postt_in(temp_dir.path())
        .env("FORCE_COLOR", "1")
        .args(["highlight", "-"])
        .write_stdin("pass")
        .assert()
        .success()
        .stdout("\x1b[4mpass\x1b[0m");
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "format = \"plain\"\n").expect("Failed to write config");

    postt_in(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["highlight", "-"])
        .write_stdin("def f(): pass")
        .assert()
        .success()
        .stdout("def f(): pass");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("postt.toml"), "format = 3\n")
        .expect("Failed to write config");

    postt_in(temp_dir.path())
        .args(["highlight", "-"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}
