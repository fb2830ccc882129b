//! Runs the compiled `prosaic` binary the way a shell user would.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("PROSAIC_LOG_DIR", std::env::temp_dir().join("prosaic-cli-tests"));
    cmd.env_remove("PROSAIC_TONE").env_remove("PROSAIC_SEED");
    cmd
}

const UNIFORM: &str = "The cat sat on the mat. The dog ran in the park. \
                       The bird flew over the tree. The fish swam in the pond.";

/// Write `content` to a named file in a fresh temp dir.
fn input_file(name: &str, content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_lists_every_command() {
    for flag in ["--help", "-h"] {
        let assert = cmd().arg(flag).assert().success();
        let out = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
        for command in ["detect", "paraphrase", "humanize", "language", "info"] {
            assert!(out.contains(command), "{flag} missing {command}");
        }
    }
    cmd()
        .arg("--help")
        .assert()
        .stdout(predicate::str::contains("PROSAIC_TONE"));
}

#[test]
fn subcommand_help_shows_its_options() {
    cmd()
        .args(["paraphrase", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--tone"))
        .stdout(predicate::str::contains("--seed"));
    cmd()
        .args(["detect", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--fail-above"));
}

#[test]
fn version_flags() {
    for flag in ["--version", "-V"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_text_has_sections() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains("Rewriting"))
        .stdout(predicate::str::contains("Thresholds"));
}

#[test]
fn info_json_has_package_and_config() {
    let assert = cmd().args(["info", "--json"]).assert().success();
    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["tone"].is_string());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn global_flags_are_accepted_anywhere() {
    let cases: &[&[&str]] = &[
        &["-q", "info"],
        &["--quiet", "info"],
        &["-v", "info"],
        &["-vv", "info"],
        &["--color", "never", "info"],
        &["--color", "always", "info"],
        &["--color", "auto", "info"],
        &["info", "--json"],
        &["-C", "/tmp", "info"],
    ];
    for args in cases {
        cmd().args(*args).assert().success();
    }
}

#[test]
fn quiet_keeps_stderr_empty_on_success() {
    cmd()
        .args(["-q", "detect", "-"])
        .write_stdin(UNIFORM)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// =============================================================================
// Detect Command
// =============================================================================

#[test]
fn detect_prints_score_and_label() {
    let (_dir, path) = input_file("uniform.txt", UNIFORM);
    cmd()
        .args(["--color", "never", "detect", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("56/100"))
        .stdout(predicate::str::contains("Likely AI-Generated"))
        .stdout(predicate::str::contains("Burstiness"));
}

#[test]
fn detect_json_outputs_report() {
    let (_dir, path) = input_file("uniform.txt", UNIFORM);
    let output = cmd().args(["detect", &path, "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["score"], 56);
    assert_eq!(json["confidence"], "Moderate");
    assert_eq!(json["color_class"], "score-medium");
    assert_eq!(json["details"]["sentence_count"], 4);
    assert_eq!(json["details"]["word_count"], 24);
    assert_eq!(json["details"]["contributions"].as_array().unwrap().len(), 8);
}

#[test]
fn detect_fail_above_exits_nonzero() {
    let (_dir, path) = input_file("uniform.txt", UNIFORM);
    cmd()
        .args(["detect", &path, "--fail-above", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scores 56"));
}

#[test]
fn detect_fail_above_passes_low_scores() {
    let (_dir, path) = input_file("uniform.txt", UNIFORM);
    cmd()
        .args(["detect", &path, "--fail-above", "60"])
        .assert()
        .success();
}

#[test]
fn detect_reads_stdin() {
    cmd()
        .args(["detect", "-", "--json"])
        .write_stdin(UNIFORM)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 56"));
}

#[test]
fn detect_empty_input_is_insufficient() {
    cmd()
        .args(["detect", "-", "--json"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Insufficient text"))
        .stdout(predicate::str::contains("details").not());
}

#[test]
fn detect_markdown_ignores_code_and_headings() {
    let doc = format!("# A heading\n\n{UNIFORM}\n\n```\nlet x = 1;\n```\n");
    let (_dir, path) = input_file("doc.md", &doc);
    cmd()
        .args(["detect", &path, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word_count\": 24"));
}

#[test]
fn detect_missing_file_fails() {
    cmd()
        .args(["detect", "/nonexistent/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn detect_respects_input_limit() {
    let (dir, path) = input_file("uniform.txt", UNIFORM);
    std::fs::write(dir.path().join(".prosaic.toml"), "max_input_bytes = 16\n").unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["detect", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Paraphrase Command
// =============================================================================

#[test]
fn paraphrase_with_seed_is_reproducible() {
    let text = "It is very important to help many people. Maybe we need good tools. \
                The team will probably ship soon.";
    let (_dir, path) = input_file("in.txt", text);
    let run = || {
        let output = cmd()
            .args(["paraphrase", &path, "--tone", "casual", "--seed", "11"])
            .assert()
            .success();
        String::from_utf8_lossy(&output.get_output().stdout).into_owned()
    };

    let first = run();
    assert!(!first.trim().is_empty());
    assert_eq!(first, run());
}

#[test]
fn paraphrase_terminates_every_sentence() {
    let (_dir, path) = input_file("in.txt", "no punctuation here at all");
    cmd()
        .args(["paraphrase", &path, "--tone", "formal", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(".\n"));
}

#[test]
fn paraphrase_json_reports_language_and_tone() {
    let (_dir, path) = input_file(
        "in.txt",
        "Ini adalah hal yang sangat penting untuk kita semua.",
    );
    let output = cmd()
        .args(["paraphrase", &path, "--tone", "academic", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["language"], "id");
    assert_eq!(json["tone"], "academic");
}

#[test]
fn paraphrase_unknown_tone_fails() {
    cmd()
        .args(["paraphrase", "-", "--tone", "poetic"])
        .write_stdin("Hello there.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn paraphrase_uses_configured_tone() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".prosaic.toml"), "tone = \"business\"\n").unwrap();
    cmd()
        .current_dir(dir.path())
        .args(["paraphrase", "-", "--json"])
        .write_stdin("Maybe we ship today.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tone\": \"business\""));
}

// =============================================================================
// Humanize Command
// =============================================================================

#[test]
fn humanize_json_has_before_and_after() {
    let (_dir, path) = input_file("uniform.txt", UNIFORM);
    let output = cmd()
        .args(["humanize", &path, "--seed", "3", "--max-passes", "3", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["before"]["score"], 56);
    assert_eq!(json["flagged"], true);
    assert_eq!(json["source"], "local");
    assert_eq!(json["language"], "en");
    let passes = json["passes"].as_u64().unwrap();
    assert!((1..=3).contains(&passes));
    assert!(!json["rewritten"].as_str().unwrap().is_empty());
}

#[test]
fn humanize_text_output_shows_scores() {
    let (_dir, path) = input_file("uniform.txt", UNIFORM);
    cmd()
        .args(["--color", "never", "humanize", &path, "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("56 (Likely AI-Generated)"))
        .stdout(predicate::str::contains("After"));
}

// =============================================================================
// Language Command
// =============================================================================

#[test]
fn language_detects_indonesian() {
    cmd()
        .args(["language", "-"])
        .write_stdin("Ini adalah buku yang sangat bagus untuk dibaca dengan teman.")
        .assert()
        .success()
        .stdout(predicate::str::diff("id\n"));
}

#[test]
fn language_defaults_to_english() {
    cmd()
        .args(["language", "-"])
        .write_stdin("12345 67890")
        .assert()
        .success()
        .stdout(predicate::str::diff("en\n"));
}

#[test]
fn language_json_includes_votes() {
    let output = cmd()
        .args(["language", "-", "--json"])
        .write_stdin("The cat and the dog are in the house.")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["language"], "en");
    assert_eq!(json["name"], "English");
    assert_eq!(json["indonesian_votes"], 0);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn bare_invocation_prints_usage() {
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_arguments_are_usage_errors() {
    for arg in ["rewrite", "--strict"] {
        cmd()
            .arg(arg)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("error:"));
    }
}

#[test]
fn missing_chdir_target_fails() {
    cmd()
        .args(["-C", "/nonexistent/prosaic/workdir", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}
