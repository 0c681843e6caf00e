//! advent CLI - scaffold and run daily puzzle solutions

mod cli;
mod commands;
mod error;
mod output;
mod template;

// Import advent-solutions to link the solution unit plugins
use advent_solutions as _;

use advent_core::{RegistryBuilder, SourceTree};
use clap::Parser;
use cli::{Args, Command};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let tree = SourceTree::new(&args.root);

    match args.command {
        Command::Run { year, day, timing } => {
            let registry = RegistryBuilder::new().register_all_plugins()?.build();
            commands::run(&registry, &tree, year, day, timing);
            Ok(())
        }
        Command::Create { year, day } => commands::create(&tree, year, day),
    }
}
