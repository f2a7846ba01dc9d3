pub mod cli;
pub mod commands;
pub mod error;
pub mod launcher;
pub mod project_identity;
pub mod registry;
pub mod resolvers;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run dotget CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: a lock guard dropped mid-install cleans up after itself
    ctrlc::set_handler(move || {
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
