//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command, parse_option_pair};
use crate::commands;
use crate::error::Result;
use crate::resolvers::{ResolutionType, ResolverOptions};
use clap::CommandFactory;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Some(Command::Install { tool, options }) => {
            let mut resolver_options = ResolverOptions::new();
            for raw in options {
                let (key, value) = parse_option_pair(raw)?;
                resolver_options.insert(key, value);
            }

            commands::install::run(commands::install::InstallOptions {
                tool: tool.clone(),
                options: resolver_options,
                resolution: ResolutionType::Install,
            })
        }

        Some(Command::Update { tool }) => {
            commands::update::run(commands::update::UpdateOptions { tool: tool.clone() })
        }

        Some(Command::List) => commands::list::run(),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
