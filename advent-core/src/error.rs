//! Error types for the core library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for ambient context access
#[derive(Debug, Clone, Error)]
pub enum ContextError {
    /// Context read before any `set_context` on this thread
    #[error("no solution context set; call set_context first")]
    NotSet,
}

/// Error type for loading puzzle input
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file absent at the resolved location
    #[error("input file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Any other filesystem failure while reading input
    #[error("failed to read input file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Context was not established before loading input
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Error type raised inside a solution unit's own code
///
/// Opaque to the runner: these propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum SolutionError {
    /// Input format doesn't match what the unit expects
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("missing data: {0}")]
    MissingData(String),
    /// Any other failure while parsing or solving
    #[error("solution failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry construction
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A unit is already registered for this year-day combination
    #[error("duplicate solution unit registration for year {0} day {1:02}")]
    DuplicateUnit(u16, u8),
}

/// Error type for a single runner invocation
#[derive(Debug, Error)]
pub enum RunError {
    /// No solution unit registered for the requested year and day
    #[error("no solution unit registered for year {year} day {day:02}")]
    UnitNotFound { year: u16, day: u8 },
    /// A unit resolved but does not bind the required `parse` entry point
    #[error("solution unit `{unit}` does not bind required entry point `parse`")]
    InterfaceViolation { unit: String },
    /// Input file could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),
    /// Ambient context access failed
    #[error(transparent)]
    Context(#[from] ContextError),
    /// Failure raised by the unit's own `parse`/`part1`/`part2` code
    #[error(transparent)]
    Solution(#[from] SolutionError),
}
