use pathfinder_core::error::Result;
use pathfinder_core::graph::Path;

/// Path as a JSON value; edges are oriented from source to target
pub fn path_to_json(path: &Path) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = path
        .steps()
        .into_iter()
        .map(|step| {
            serde_json::json!({
                "id": step.edge.id.index(),
                "from": step.from,
                "to": step.to,
                "weight": step.edge.weight,
            })
        })
        .collect();

    serde_json::json!({
        "from": path.source,
        "to": path.target,
        "found": true,
        "total_weight": path.total_weight,
        "vertices": path.vertices(),
        "edges": edges,
    })
}

pub fn output_path_json(path: &Path) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&path_to_json(path))?);
    Ok(())
}
