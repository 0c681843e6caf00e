//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registry construction failed
    #[error("registration error: {0}")]
    Registration(#[from] advent_core::RegistrationError),

    /// Filesystem failure during scaffolding
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
