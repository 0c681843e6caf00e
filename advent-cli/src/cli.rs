//! CLI argument parsing using clap

use advent_core::paths::DEFAULT_SRC_ROOT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Daily puzzle solution runner and scaffolder
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Scaffold and run daily puzzle solutions", version)]
pub struct Args {
    /// Source tree root containing the year_YYYY modules
    #[arg(long, default_value = DEFAULT_SRC_ROOT)]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the solution for a specific year and day
    Run {
        /// Year (e.g., 2024)
        #[arg(short, long)]
        year: u16,

        /// Day (1-25)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Show per-part timing
        #[arg(short, long)]
        timing: bool,
    },

    /// Create template files for a new day
    Create {
        /// Year (e.g., 2024)
        #[arg(short, long)]
        year: u16,

        /// Day (1-25)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,
    },
}
