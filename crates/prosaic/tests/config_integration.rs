//! End-to-end config discovery through the compiled binary.
//!
//! Each test lays out config files in a temp tree, runs `info --json` (or a
//! rewrite command) from inside it and checks what the binary resolved.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("PROSAIC_LOG_DIR", std::env::temp_dir().join("prosaic-cli-tests"));
    cmd.env_remove("PROSAIC_TONE").env_remove("PROSAIC_SEED");
    cmd
}

fn dir_arg(dir: &Path) -> &str {
    dir.to_str().unwrap()
}

/// The `config` object from `info --json`, run inside `dir`.
fn resolved(dir: &Path) -> Value {
    let output = cmd()
        .args(["-C", dir_arg(dir), "info", "--json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "info failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let mut json: Value = serde_json::from_slice(&output.stdout).unwrap();
    json["config"].take()
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn fails_in(dir: &Path) -> assert_cmd::assert::Assert {
    cmd().args(["-C", dir_arg(dir), "info"]).assert().failure()
}

// Discovery

#[test]
fn defaults_apply_without_any_file() {
    let tmp = TempDir::new().unwrap();
    let config = resolved(tmp.path());

    assert!(config["config_file"].is_null());
    assert_eq!(config["log_level"], "info");
    assert_eq!(config["tone"], "casual");
    assert!(config["seed"].is_null());
    assert_eq!(config["flag_threshold"], 50);
    assert_eq!(config["pass_threshold"], 40);
    assert_eq!(config["max_passes"], 1);
    assert_eq!(config["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn every_format_and_file_name_is_discovered() {
    let cases = [
        (".prosaic.toml", "tone = \"academic\"\n", "academic"),
        ("prosaic.toml", "tone = \"business\"\n", "business"),
        (".prosaic.yaml", "tone: formal\n", "formal"),
        ("prosaic.yml", "tone: academic\n", "academic"),
        (".prosaic.json", r#"{"tone": "business"}"#, "business"),
    ];
    for (name, contents, tone) in cases {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), name, contents);

        let config = resolved(tmp.path());
        assert_eq!(config["tone"], tone, "{name}");
        assert!(
            config["config_file"].as_str().unwrap().ends_with(name),
            "{name}"
        );
    }
}

#[test]
fn rewrite_and_threshold_settings_round_trip() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        ".prosaic.toml",
        "seed = 7\nflag_threshold = 65\npass_threshold = 30\nmax_passes = 3\nmax_input_bytes = 2048\n",
    );

    let config = resolved(tmp.path());
    assert_eq!(config["seed"], 7);
    assert_eq!(config["flag_threshold"], 65);
    assert_eq!(config["pass_threshold"], 30);
    assert_eq!(config["max_passes"], 3);
    assert_eq!(config["max_input_bytes"], 2048);
}

#[test]
fn disabling_the_limit_reports_no_maximum() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "prosaic.toml",
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    );

    assert!(resolved(tmp.path())["max_input_bytes"].is_null());
}

#[test]
fn search_walks_up_from_nested_directories() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("drafts").join("2026");
    fs::create_dir_all(&deep).unwrap();
    write(tmp.path(), ".prosaic.toml", "flag_threshold = 70\n");

    assert_eq!(resolved(&deep)["flag_threshold"], 70);
}

#[test]
fn nearest_directory_shadows_its_parents() {
    let tmp = TempDir::new().unwrap();
    let child = tmp.path().join("chapter");
    fs::create_dir(&child).unwrap();
    write(tmp.path(), ".prosaic.toml", "tone = \"business\"\nseed = 3\n");
    write(&child, ".prosaic.toml", "tone = \"formal\"\n");

    let config = resolved(&child);
    assert_eq!(config["tone"], "formal");
    // Parent files are not merged once a closer one exists.
    assert!(config["seed"].is_null());
}

#[test]
fn repo_root_ends_the_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    write(tmp.path(), ".prosaic.toml", "tone = \"academic\"\n");

    let config = resolved(&src);
    assert_eq!(config["tone"], "casual");
    assert!(config["config_file"].is_null());
}

#[test]
fn file_beside_the_repo_marker_is_used() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    write(tmp.path(), "prosaic.yaml", "tone: academic\n");

    assert_eq!(resolved(&src)["tone"], "academic");
}

// Precedence

#[test]
fn same_directory_files_merge_in_order() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), ".prosaic.toml", "tone = \"academic\"\nseed = 5\n");
    write(tmp.path(), ".prosaic.yaml", "tone: business\n");
    write(tmp.path(), "prosaic.json", r#"{"max_passes": 2}"#);

    let config = resolved(tmp.path());
    assert_eq!(config["tone"], "business");
    assert_eq!(config["seed"], 5);
    assert_eq!(config["max_passes"], 2);
    assert!(
        config["config_file"]
            .as_str()
            .unwrap()
            .ends_with("prosaic.json")
    );
}

#[test]
fn explicit_file_beats_discovered_ones() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), ".prosaic.toml", "tone = \"academic\"\n");
    let explicit = tmp.path().join("ci.toml");
    fs::write(&explicit, "tone = \"formal\"\n").unwrap();

    let output = cmd()
        .args(["-C", dir_arg(tmp.path())])
        .args(["--config", explicit.to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["tone"], "formal");
    assert!(
        json["config"]["config_file"]
            .as_str()
            .unwrap()
            .ends_with("ci.toml")
    );
}

#[test]
fn environment_beats_files() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), ".prosaic.toml", "tone = \"business\"\n");

    let output = cmd()
        .env("PROSAIC_TONE", "formal")
        .env("PROSAIC_PASS_THRESHOLD", "20")
        .args(["-C", dir_arg(tmp.path()), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["tone"], "formal");
    assert_eq!(json["config"]["pass_threshold"], 20);
}

#[test]
fn configured_seed_makes_paraphrase_reproducible() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), ".prosaic.toml", "seed = 21\n");
    let text = "It is very important to help many people. Maybe we need good tools.";

    let run = || {
        cmd()
            .args(["-C", dir_arg(tmp.path()), "paraphrase", "-"])
            .write_stdin(text)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

// Bad input

#[test]
fn unknown_tone_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), ".prosaic.toml", "tone = \"poetic\"\n");

    fails_in(tmp.path()).stderr(predicate::str::contains("configuration"));
}

#[test]
fn malformed_files_are_rejected() {
    let cases = [
        (".prosaic.toml", "tone = [[["),
        (".prosaic.yaml", "tone:\n  - [unclosed"),
        (".prosaic.json", "{tone: casual}"),
    ];
    for (name, contents) in cases {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), name, contents);
        fails_in(tmp.path()).stderr(predicate::str::contains("configuration"));
    }
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), ".prosaic.toml", "flag_threshold = 300\n");

    fails_in(tmp.path());
}

#[test]
fn unknown_keys_are_ignored() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        ".prosaic.toml",
        "tone = \"formal\"\nmodel = \"gpt\"\n[extra]\nanything = 1\n",
    );

    assert_eq!(resolved(tmp.path())["tone"], "formal");
}
