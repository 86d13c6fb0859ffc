use crate::cli::support::{pathfinder, stdout_of, EXAMPLE_EDGES, TIED_EDGES};
use predicates::prelude::*;

// ============================================================================
// Path command tests
// ============================================================================

#[test]
fn test_example_path_human() {
    let output = pathfinder()
        .args(["path", "--from", "A", "--to", "F", "--edge", EXAMPLE_EDGES])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let mut lines = stdout.lines();
    let route = lines.next().unwrap_or_default();
    assert!(
        route == "A -> B -> D -> F" || route == "A -> E -> D -> F",
        "unexpected route {:?}",
        route
    );
    assert_eq!(lines.next(), Some("Total weight: 11 (3 edges)"));
}

#[test]
fn test_repeated_edge_flags() {
    pathfinder()
        .args([
            "path", "--from", "A", "--to", "C", "--edge", "A:B:4", "--edge", "B:C:1", "-e",
            "A:C:9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"))
        .stdout(predicate::str::contains("Total weight: 5 (2 edges)"));
}

#[test]
fn test_example_path_json() {
    let output = pathfinder()
        .args([
            "--format", "json", "path", "--from", "A", "--to", "F", "--edge", EXAMPLE_EDGES,
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "A");
    assert_eq!(json["to"], "F");
    assert_eq!(json["found"], true);
    assert_eq!(json["total_weight"], 11);
    assert_eq!(json["vertices"].as_array().map(Vec::len), Some(4));

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0]["from"], "A");
    assert_eq!(edges[2]["to"], "F");
    let sum: u64 = edges.iter().filter_map(|e| e["weight"].as_u64()).sum();
    assert_eq!(sum, 11);
}

#[test]
fn test_example_path_records() {
    pathfinder()
        .args([
            "--format", "records", "path", "--from", "A", "--to", "F", "--edge", EXAMPLE_EDGES,
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H from=A to=F total_weight=11 edges=3\nE A ",
        ))
        .stdout(predicate::str::contains("E D F 2"));
}

#[test]
fn test_source_equals_target() {
    pathfinder()
        .args(["path", "--from", "C", "--to", "C", "--edge", EXAMPLE_EDGES])
        .assert()
        .success()
        .stdout("C\nTotal weight: 0 (0 edges)\n");
}

#[test]
fn test_single_edge_path() {
    pathfinder()
        .args(["path", "--from", "B", "--to", "A", "--edge", "A:B:4"])
        .assert()
        .success()
        .stdout("B -> A\nTotal weight: 4 (1 edge)\n");
}

#[test]
fn test_unreachable_target_exits_3() {
    pathfinder()
        .args([
            "path", "--from", "A", "--to", "Z", "--edge", EXAMPLE_EDGES, "--vertex", "Z",
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no path found from A to Z"));
}

#[test]
fn test_unknown_vertex_exits_3() {
    pathfinder()
        .args(["path", "--from", "A", "--to", "Q", "--edge", EXAMPLE_EDGES])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no path found from A to Q"));
}

#[test]
fn test_unreachable_target_json_error() {
    let output = pathfinder()
        .args([
            "--format", "json", "path", "--from", "A", "--to", "Y", "--edge", "A:B:1,X:Y:1",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "not_found");
}

#[test]
fn test_quiet_suppresses_error_message() {
    pathfinder()
        .args(["--quiet", "path", "--from", "A", "--to", "Q", "--edge", "A:B:1"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_malformed_edge_exits_2() {
    pathfinder()
        .args(["path", "--from", "A", "--to", "B", "--edge", "A-B-4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected A:B:WEIGHT"));
}

#[test]
fn test_negative_weight_rejected() {
    pathfinder()
        .args(["path", "--from", "A", "--to", "B", "--edge", "A:B:-4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_malformed_edge_json_error() {
    let output = pathfinder()
        .args([
            "--format", "json", "path", "--from", "A", "--to", "B", "--edge", "A:B:x",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_missing_target_is_usage_error() {
    pathfinder()
        .args(["path", "--from", "A", "--edge", "A:B:1"])
        .assert()
        .code(2);
}

#[test]
fn test_parallel_edges_and_self_loops() {
    pathfinder()
        .args([
            "path", "--from", "A", "--to", "B", "--edge", "A:A:0,A:B:9,B:A:2,A:B:5",
        ])
        .assert()
        .success()
        .stdout("A -> B\nTotal weight: 2 (1 edge)\n");
}

#[test]
fn test_default_tie_break_follows_edge_order() {
    pathfinder()
        .args(["path", "--from", "A", "--to", "D", "--edge", TIED_EDGES])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A -> C -> D\n"));
}

#[test]
fn test_vertex_id_tie_break_flag() {
    pathfinder()
        .args([
            "path",
            "--from",
            "A",
            "--to",
            "D",
            "--edge",
            TIED_EDGES,
            "--tie-break",
            "vertex-id",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A -> B -> D\n"));
}

#[test]
fn test_unknown_tie_break_rejected() {
    pathfinder()
        .args([
            "path", "--from", "A", "--to", "B", "--edge", "A:B:1", "--tie-break", "random",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown tie-break"));
}

#[test]
fn test_empty_graph_is_usage_error() {
    pathfinder()
        .args(["path", "--from", "A", "--to", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph given"));
}

#[test]
fn test_max_weight_edge() {
    pathfinder()
        .args([
            "path",
            "--from",
            "A",
            "--to",
            "C",
            "--edge",
            "A:B:18446744073709551614,B:C:1",
        ])
        .assert()
        .success()
        .stdout("A -> B -> C\nTotal weight: 18446744073709551615 (2 edges)\n");
}

#[test]
fn test_weight_overflow_exits_3() {
    pathfinder()
        .args([
            "path",
            "--from",
            "A",
            "--to",
            "C",
            "--edge",
            "A:B:18446744073709551615,B:C:1",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path weight from A to C exceeds"));
}
