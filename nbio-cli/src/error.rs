//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Table range with its bounds reversed
    #[error("Invalid code range: {from} is greater than {to}")]
    InvalidRange {
        /// Lower bound as given
        from: i32,
        /// Upper bound as given
        to: i32,
    },
    /// Function name that renders to nothing
    #[error("Function name must not be empty")]
    EmptyFunction,
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
