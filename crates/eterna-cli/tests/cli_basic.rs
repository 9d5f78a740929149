//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory and verify
//! outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command with `stdin` piped in and return (stdout, stderr, code).
fn run_cli(data_dir: &Path, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_eterna"))
        .args(args)
        .env("ETERNA_DATA_DIR", data_dir)
        .env_remove("ETERNA_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args, "");
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    stdout
}

#[test]
fn test_scores_start_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_ok(dir.path(), &["scores"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let lines = parsed.as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l["high_score"] == 0));
    assert_eq!(lines[0]["game"], "hieroglyphPuzzle");
    assert_eq!(lines[0]["rank"]["title"], "Student of Hieroglyphs");
}

#[test]
fn test_onboarding_flag_persists() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_ok(dir.path(), &["onboarding", "status"]).contains("false"));
    assert_eq!(run_ok(dir.path(), &["onboarding", "complete"]).trim(), "ok");
    assert!(run_ok(dir.path(), &["onboarding", "status"]).contains("true"));
    assert!(dir.path().join("eterna.db").exists());
}

#[test]
fn test_journal_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_ok(
        dir.path(),
        &[
            "journal",
            "add",
            "--response",
            "Sat by the river at dawn.",
            "--mood",
            "nile-calm",
            "--seed",
            "3",
        ],
    );
    let entry: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entry["mood"], "nileCalm");
    assert!(!entry["prompt"].as_str().unwrap().is_empty());

    let list: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["journal", "list"])).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["response"], "Sat by the river at dawn.");
}

#[test]
fn test_journal_rejects_blank_response() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["journal", "add", "--response", "   "], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    let list = run_ok(dir.path(), &["journal", "list"]);
    assert_eq!(list.trim(), "[]");
}

#[test]
fn test_config_get_set_reset() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        run_ok(dir.path(), &["config", "get", "games.pyramid_variant"]).trim(),
        "classic"
    );
    run_ok(dir.path(), &["config", "set", "games.pyramid_variant", "grand"]);
    assert_eq!(
        run_ok(dir.path(), &["config", "get", "games.pyramid_variant"]).trim(),
        "grand"
    );
    assert!(dir.path().join("config.toml").exists());

    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "games.nope", "1"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));

    run_ok(dir.path(), &["config", "set", "games.seed", "42"]);
    assert_eq!(run_ok(dir.path(), &["config", "get", "games.seed"]).trim(), "42");
    run_ok(dir.path(), &["config", "set", "games.seed", "null"]);
    assert_eq!(run_ok(dir.path(), &["config", "get", "games.seed"]).trim(), "null");

    run_ok(dir.path(), &["config", "reset"]);
    assert!(run_ok(dir.path(), &["config", "list"]).contains("games.pyramid_variant = classic"));
}

#[test]
fn test_meditation_skip_to_end_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let types: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["meditation", "types"])).unwrap();
    assert_eq!(types.as_array().unwrap().len(), 4);

    let script = "s\n".repeat(20);
    let (stdout, stderr, code) = run_cli(dir.path(), &["meditation", "play", "nile-flow"], &script);
    assert_eq!(code, 0, "{stderr}");
    assert!(stdout.contains("Session saved."));

    let stats: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["meditation", "stats"])).unwrap();
    assert_eq!(stats["total_sessions"], 1);
    assert_eq!(stats["total_secs"], 480);
    assert_eq!(stats["total_time"], "8m");
    assert_eq!(stats["streak_days"], 1);
}

#[test]
fn test_quitting_a_game_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["play", "history", "--seed", "7"], "q\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("No score recorded"));

    let scores: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["scores"])).unwrap();
    assert_eq!(scores[1]["high_score"], 0);
}

#[test]
fn test_unknown_meditation_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["meditation", "play", "moon-walk"], "");
    assert_ne!(code, 0);
}

#[test]
fn test_mind_list_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let cards: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["mind", "list"])).unwrap();
    assert_eq!(cards.as_array().unwrap().len(), 4);
    assert_eq!(cards[0]["name"], "pharaohs-focus");
    assert_eq!(cards[0]["category"], "Pharaoh Focus");

    let shown = run_ok(dir.path(), &["mind", "show", "desert-resilience"]);
    assert!(shown.contains("Complete a difficult task without giving up"));
    assert!(shown.contains("laying pyramid stones one by one"));
    assert!(shown.contains("Be like the pyramid"));

    let (_, stderr, code) = run_cli(dir.path(), &["mind", "show", "sphinx-riddle"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown mind training exercise"));
}
