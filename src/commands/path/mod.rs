//! Path command
//!
//! Builds a graph from the command-line edges and prints the minimum-weight
//! path between two of its vertices.

pub mod human;
pub mod json;
pub mod records;

use std::time::Instant;

use crate::cli::{Cli, EdgeSpec};
use pathfinder_core::error::Result;
use pathfinder_core::graph::{find_shortest_path_with, Graph, SearchOptions};
use pathfinder_core::logging::SearchMetrics;
use pathfinder_core::{bail_usage, log_search_metrics, trace_time};

/// Build the graph described by edge specs plus isolated vertices
pub fn build_graph(edges: &[EdgeSpec], vertices: &[String]) -> Graph {
    let mut graph = Graph::new();
    for edge in edges {
        graph.add_edge(edge.weight, edge.from.as_str(), edge.to.as_str());
    }
    for vertex in vertices {
        graph.add_vertex(vertex.as_str());
    }
    graph
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    from: &str,
    to: &str,
    edges: &[EdgeSpec],
    vertices: &[String],
    options: &SearchOptions,
) -> Result<()> {
    let start = Instant::now();

    if edges.is_empty() && vertices.is_empty() {
        bail_usage!("no graph given (pass --edge A:B:WEIGHT or --vertex V)");
    }

    let graph = build_graph(edges, vertices);
    trace_time!(
        start,
        "build_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );

    let metrics = SearchMetrics::new();
    metrics.record_search();
    let result = find_shortest_path_with(&graph, from, to, options, &metrics);

    if cli.verbose {
        log_search_metrics!(&metrics, "path");
        tracing::debug!(elapsed = ?start.elapsed(), "search");
    }

    let path = result?;

    crate::output_by_format!(cli.format,
        json => { json::output_path_json(&path)? },
        human => { human::output_path_human(&path); },
        records => { records::output_path_records(&path); }
    );

    Ok(())
}
