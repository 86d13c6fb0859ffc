use crate::cli::support::{pathfinder, EXAMPLE_EDGES};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

const PATH_ARGS: [&str; 7] = ["path", "--from", "A", "--to", "G", "--edge", EXAMPLE_EDGES];

#[test]
fn test_log_level_debug_shows_debug_messages() {
    pathfinder()
        .args(["--log-level", "debug"])
        .args(PATH_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("path_found"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    pathfinder()
        .args(["--log-level", "warn"])
        .args(PATH_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_logging_is_quiet() {
    pathfinder()
        .args(PATH_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_shows_search_metrics() {
    pathfinder()
        .arg("--verbose")
        .args(PATH_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("search_metrics"));
}

#[test]
fn test_trace_level_shows_search_steps() {
    pathfinder()
        .args(["--log-level", "trace"])
        .args(PATH_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("settled"))
        .stderr(predicate::str::contains("build_graph"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = pathfinder()
        .args(["--log-level", "debug", "--log-json"])
        .args(PATH_ARGS)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"message\":\"parse_args\""));
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "not JSON: {}",
            line
        );
    }
}

#[test]
fn test_env_filter_overrides_flags() {
    pathfinder()
        .env("PATHFINDER_LOG", "pathfinder=debug")
        .args(PATH_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_config_log_level() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathfinder.toml");
    fs::write(&config, "[log]\nlevel = \"debug\"\n").unwrap();

    pathfinder()
        .arg("--config")
        .arg(&config)
        .args(PATH_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_output_keeps_stdout_clean() {
    pathfinder()
        .args(["--log-level", "debug", "--format", "json"])
        .args(PATH_ARGS)
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            serde_json::from_str::<serde_json::Value>(out).is_ok()
        }));
}
