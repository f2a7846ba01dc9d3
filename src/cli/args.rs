use crate::error::{DotGetError, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "dotget",
    about = "Install and update .NET command-line tools",
    long_about = "Installs command-line tools as per-user launchers: resolves a tool \
to an executable artifact, writes a platform launcher into ~/.nuget/bin and records \
the install options in ~/.nuget/etc so the tool can be updated later.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install a tool and generate its launcher
    Install {
        /// Tool to install
        tool: String,

        /// Resolver option (repeatable)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },

    /// Update an installed tool using its recorded install options
    Update {
        /// Tool to update
        tool: String,
    },

    /// List installed tools and their recorded options
    List,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Split a `KEY=VALUE` CLI option; the value may itself contain `=`.
pub fn parse_option_pair(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(DotGetError::InvalidOption(raw.to_string())),
    }
}
