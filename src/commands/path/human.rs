use pathfinder_core::graph::Path;

pub fn output_path_human(path: &Path) {
    let names: Vec<&str> = path.vertices().into_iter().map(|v| v.as_str()).collect();
    println!("{}", names.join(" -> "));

    let noun = if path.len() == 1 { "edge" } else { "edges" };
    println!("Total weight: {} ({} {})", path.total_weight, path.len(), noun);
}
