//! Value parsers for command-line arguments

use regex::Regex;

use pathfinder_core::format::OutputFormat;
use pathfinder_core::graph::TieBreak;

/// An undirected edge given on the command line as `A:B:WEIGHT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse tie-break mode from string
pub fn parse_tie_break(s: &str) -> std::result::Result<TieBreak, String> {
    s.parse::<TieBreak>()
}

/// Parse an `A:B:WEIGHT` edge. Vertex names may not contain `:`, `,` or
/// whitespace; the weight must be a non-negative integer.
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    let edge_re = Regex::new(r"^([^:,\s]+):([^:,\s]+):(\S+)$")
        .map_err(|e| format!("failed to compile edge pattern: {}", e))?;

    let caps = edge_re
        .captures(s.trim())
        .ok_or_else(|| format!("invalid edge '{}' (expected A:B:WEIGHT)", s))?;

    let weight_str = &caps[3];
    let weight = weight_str.parse::<u64>().map_err(|_| {
        if weight_str.starts_with('-') {
            format!("invalid edge '{}': weight must be non-negative", s)
        } else {
            format!(
                "invalid edge '{}': weight '{}' is not a non-negative integer",
                s, weight_str
            )
        }
    })?;

    Ok(EdgeSpec {
        from: caps[1].to_string(),
        to: caps[2].to_string(),
        weight,
    })
}
