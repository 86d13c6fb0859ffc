//! CLI argument parsing for pathfinder
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use parse::EdgeSpec;
pub use pathfinder_core::format::OutputFormat;
use pathfinder_core::graph::TieBreak;
use parse::{parse_edge_spec, parse_format, parse_tie_break};

/// Pathfinder - shortest paths over weighted undirected graphs
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing and search counters
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, pathfinder=trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: per-user config.toml)
    #[arg(long, global = true, env = "PATHFINDER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the minimum-weight path between two vertices
    Path {
        /// Source vertex
        #[arg(long)]
        from: String,

        /// Target vertex
        #[arg(long)]
        to: String,

        /// Undirected edge as A:B:WEIGHT (repeatable, or comma-separated)
        #[arg(
            long,
            short,
            value_parser = parse_edge_spec,
            value_delimiter = ',',
            action = clap::ArgAction::Append,
            value_name = "A:B:WEIGHT"
        )]
        edge: Vec<EdgeSpec>,

        /// Isolated vertex with no edges (repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        vertex: Vec<String>,

        /// Order among equal-distance candidates (insertion, vertex-id)
        #[arg(long, value_parser = parse_tie_break)]
        tie_break: Option<TieBreak>,
    },
}
