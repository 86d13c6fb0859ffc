//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use pathfinder_core::config::PathfinderConfig;
use pathfinder_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a PathfinderConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a PathfinderConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over weighted undirected graphs.");
        println!();
        println!("Run `pathfinder --help` for usage information.");
        Ok(())
    }
}
