//! Command dispatch logic for pathfinder

use std::time::Instant;

use crate::cli::{Cli, Commands};
use pathfinder_core::config::PathfinderConfig;
use pathfinder_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path {
                from,
                to,
                edge,
                vertex,
                tie_break,
            } => {
                let mut options = ctx.config.search_options();
                if let Some(tie_break) = tie_break {
                    options.tie_break = *tie_break;
                }

                crate::commands::path::execute(ctx.cli, from, to, edge, vertex, &options)?;
                if ctx.cli.verbose {
                    debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
                }
                Ok(())
            }
        }
    }
}

pub fn run(cli: &Cli, config: &PathfinderConfig, start: Instant) -> Result<()> {
    debug!(tie_break = %config.search.tie_break, elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
