//! CLI integration tests for lh commands.
//!
//! These tests focus on exit codes and the structure of the emitted search body, not on
//! human-oriented formatting which may change.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to run `lh` in `dir` with HOME isolated to it.
fn lh(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("lh").unwrap();
    cmd.current_dir(dir).env("HOME", dir);
    cmd
}

/// Runs `lh query` with `args` and parses the search body.
fn query_body(dir: &Path, args: &[&str]) -> Value {
    let output = lh(dir).arg("query").args(args).output().unwrap();
    assert!(output.status.success(), "lh query {args:?} failed");
    serde_json::from_slice(&output.stdout).unwrap()
}

mod query {
    use super::*;

    #[test]
    fn prints_search_body() {
        let dir = temp_dir();
        let body = query_body(dir.path(), &["cats"]);
        assert_eq!(body["from"], 0);
        assert_eq!(body["size"], 10);
        let root = &body["query"]["bool"];
        assert_eq!(root["should"].as_array().unwrap().len(), 4);
        assert_eq!(
            root["must"][0]["bool"]["should"].as_array().unwrap().len(),
            12
        );
    }

    #[test]
    fn bid_state_filter_last() {
        let dir = temp_dir();
        let body = query_body(
            dir.path(),
            &["x", "--media-type", "video", "--claim-type", "file"],
        );
        let filters = body["query"]["bool"]["filter"].as_array().unwrap();
        assert_eq!(filters.len(), 3);
        assert_eq!(
            filters[2]["bool"]["must_not"][0]["match"]["bid_state"]["query"],
            "Accepted"
        );
    }

    #[test]
    fn paging_flags() {
        let dir = temp_dir();
        let body = query_body(dir.path(), &["x", "--from", "30", "--size", "15"]);
        assert_eq!(body["from"], 30);
        assert_eq!(body["size"], 15);
    }

    #[test]
    fn now_fixes_origin() {
        let dir = temp_dir();
        let body = query_body(dir.path(), &["x", "--now", "2024-06-01T00:00:00Z"]);
        assert_eq!(
            body["query"]["bool"]["should"][2]["function_score"]["functions"][0]["gauss"]
                ["release_time"]["origin"],
            "2024-06-01T00:00:00Z"
        );
    }

    #[test]
    fn compact_is_single_line() {
        let dir = temp_dir();
        let output = lh(dir.path())
            .args(["query", "x", "--compact"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.trim_end().lines().count(), 1);
    }

    #[test]
    fn explain_shows_matchers() {
        let dir = temp_dir();
        lh(dir.path())
            .args(["query", "@alice", "--explain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Query tree:"))
            .stdout(predicate::str::contains("name-match-@boost"));
    }

    #[test]
    fn explain_shows_configured_index() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".lh.toml"),
            "[search]\nindex = \"claims_v9\"\n",
        )
        .unwrap();
        lh(dir.path())
            .args(["query", "x", "--explain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("POST /claims_v9/_search"));
    }

    #[test]
    fn invalid_nsfw_rejected() {
        let dir = temp_dir();
        lh(dir.path())
            .args(["query", "x", "--nsfw", "sometimes"])
            .assert()
            .failure();
    }

    #[test]
    fn config_drives_size_and_weights() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".lh.toml"),
            "[search]\nsize = 3\n[scoring]\ncontrolling_weight = 50.0\n",
        )
        .unwrap();
        let body = query_body(dir.path(), &["x"]);
        assert_eq!(body["size"], 3);
        assert_eq!(
            body["query"]["bool"]["should"][3]["function_score"]["functions"][0]["weight"],
            50.0
        );
    }

    #[test]
    fn invalid_configured_origin_fails() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".lh.toml"),
            "[scoring]\nrelease_origin = \"whenever\"\n",
        )
        .unwrap();
        lh(dir.path())
            .args(["query", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_defaults() {
        let dir = temp_dir();
        lh(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("[scoring]"))
            .stdout(predicate::str::contains("controlling_weight = 20.0"));
    }

    #[test]
    fn invalid_toml_fails() {
        let dir = temp_dir();
        fs::write(dir.path().join(".lh.toml"), "[search\n").unwrap();
        lh(dir.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod check {
    use super::*;

    #[test]
    fn clean_config_succeeds() {
        let dir = temp_dir();
        lh(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn warnings_fail() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".lh.toml"),
            "[scoring]\nrelease_decay = 3.0\n",
        )
        .unwrap();
        lh(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("release_decay"))
            .stdout(predicate::str::contains("Hints:"));
    }

    #[test]
    fn prints_config_root() {
        let dir = temp_dir();
        let project = dir.path().join("proj");
        fs::create_dir(&project).unwrap();
        fs::write(project.join(".lh.toml"), "[search]\nsize = 5\n").unwrap();
        lh(dir.path())
            .current_dir(&project)
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Config root:"))
            .stdout(predicate::str::contains("proj"));
    }

    #[test]
    fn no_config_root_without_files() {
        let dir = temp_dir();
        lh(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Config root:").not());
    }

    #[test]
    fn non_finite_weight_fails() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".lh.toml"),
            "[scoring]\nclaim_weight = nan\n",
        )
        .unwrap();
        lh(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("finite number"));
    }
}
