use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Edges of the seven-vertex example graph (A-G)
pub const EXAMPLE_EDGES: &str =
    "A:B:4,A:C:3,A:E:7,B:C:6,B:D:5,C:D:11,C:E:8,D:E:2,D:F:2,D:G:10,E:G:5,F:G:3";

/// Two equal-weight routes from A to D: A-C-D (pushed first) and A-B-D
pub const TIED_EDGES: &str = "A:C:1,A:B:1,C:D:1,B:D:1";

/// Get a Command for pathfinder, isolated from the user's config and log environment
pub fn pathfinder() -> Command {
    let mut cmd = cargo_bin_cmd!("pathfinder");
    cmd.env_remove("PATHFINDER_CONFIG")
        .env_remove("PATHFINDER_LOG")
        .env_remove("RUST_LOG")
        .env(
            "PATHFINDER_CONFIG_DIR",
            std::env::temp_dir().join("pathfinder-tests-no-config"),
        );
    cmd
}

/// Stdout of a finished command as a String
pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
