use crate::cli::support::{pathfinder, TIED_EDGES};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

const VERTEX_ID_CONFIG: &str = "[search]\ntie_break = \"vertex-id\"\n";

#[test]
fn test_config_file_sets_tie_break() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathfinder.toml");
    fs::write(&config, VERTEX_ID_CONFIG).unwrap();

    pathfinder()
        .arg("--config")
        .arg(&config)
        .args(["path", "--from", "A", "--to", "D", "--edge", TIED_EDGES])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A -> B -> D\n"));
}

#[test]
fn test_flag_overrides_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pathfinder.toml");
    fs::write(&config, VERTEX_ID_CONFIG).unwrap();

    pathfinder()
        .arg("--config")
        .arg(&config)
        .args([
            "path",
            "--from",
            "A",
            "--to",
            "D",
            "--edge",
            TIED_EDGES,
            "--tie-break",
            "insertion",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A -> C -> D\n"));
}

#[test]
fn test_discovers_user_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), VERTEX_ID_CONFIG).unwrap();

    pathfinder()
        .env("PATHFINDER_CONFIG_DIR", dir.path())
        .args(["path", "--from", "A", "--to", "D", "--edge", TIED_EDGES])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A -> B -> D\n"));
}

#[test]
fn test_explicit_config_wins_over_discovered() {
    let user_dir = tempdir().unwrap();
    fs::write(user_dir.path().join("config.toml"), VERTEX_ID_CONFIG).unwrap();

    let dir = tempdir().unwrap();
    let config = dir.path().join("explicit.toml");
    fs::write(&config, "[search]\ntie_break = \"insertion\"\n").unwrap();

    pathfinder()
        .env("PATHFINDER_CONFIG_DIR", user_dir.path())
        .arg("--config")
        .arg(&config)
        .args(["path", "--from", "A", "--to", "D", "--edge", TIED_EDGES])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A -> C -> D\n"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[search]\ntie_break = \"random\"\n").unwrap();

    pathfinder()
        .arg("--config")
        .arg(&config)
        .args(["path", "--from", "A", "--to", "B", "--edge", "A:B:1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();

    pathfinder()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["path", "--from", "A", "--to", "B", "--edge", "A:B:1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}
