//! Records output: one header line, then one `E` line per edge

use pathfinder_core::graph::Path;

pub fn path_records(path: &Path) -> Vec<String> {
    let mut lines = Vec::with_capacity(path.len() + 1);
    lines.push(format!(
        "H from={} to={} total_weight={} edges={}",
        path.source,
        path.target,
        path.total_weight,
        path.len()
    ));
    for step in path.steps() {
        lines.push(format!("E {} {} {}", step.from, step.to, step.edge.weight));
    }
    lines
}

pub fn output_path_records(path: &Path) {
    for line in path_records(path) {
        println!("{}", line);
    }
}
