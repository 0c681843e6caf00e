//! Scaffold and runner core for daily programming puzzles
//!
//! This library carries the thin core of a puzzle-solving workflow:
//!
//! - An ambient, thread-scoped [`SolutionContext`] binding the active
//!   (year, day) pair for the duration of one run, so decoupled utilities
//!   like the input loader need no explicit parameter threading.
//! - A pure [`paths`] resolver mapping (year, day) to on-disk locations.
//! - An input loader ([`get_data`]) that reads the active puzzle's text.
//! - A [`Solution`] contract with a required `parse` and optional
//!   `part1`/`part2`, registered through an `inventory`-backed
//!   [`UnitRegistry`] and driven by [`run_solution`].
//!
//! # Quick example
//!
//! ```
//! use advent_core::{RegistryBuilder, Solution, SolutionError, TypedUnit};
//!
//! struct Day;
//!
//! impl Solution for Day {
//!     type Parsed = Vec<String>;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed, SolutionError> {
//!         Ok(input.lines().map(str::to_owned).collect())
//!     }
//!
//!     fn part1(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
//!         Some(Ok(parsed.len().to_string()))
//!     }
//! }
//!
//! static DAY: TypedUnit<Day> = TypedUnit::new();
//!
//! let registry = RegistryBuilder::new().register(2024, 1, &DAY).unwrap().build();
//! assert!(registry.contains(2024, 1));
//! ```
//!
//! Solution units normally skip the manual registration above and derive
//! [`AutoRegisterUnit`] instead; the binary then calls
//! `RegistryBuilder::new().register_all_plugins()`.

mod context;
mod error;
mod input;
pub mod paths;
mod registry;
mod runner;
mod solution;

pub use context::{SolutionContext, get_context, get_day, get_year, set_context};
pub use error::{ContextError, InputError, RegistrationError, RunError, SolutionError};
pub use input::{get_data, get_data_in, parse_lines};
pub use paths::SourceTree;
pub use registry::{RegistryBuilder, UnitPlugin, UnitRegistry};
pub use runner::{PartReport, run_solution, run_solution_in, unit_name};
pub use solution::{Solution, TypedUnit, UnitBindings, UnitInstance};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use advent_macros::AutoRegisterUnit;
