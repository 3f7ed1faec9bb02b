//! Error types for the CLI application.
//!
//! Engine failures (bad card tokens, duplicate cards, exhausted budget) are
//! wrapped rather than flattened to strings so the original cause stays
//! reachable through `source()`.

use staybot_engine::errors::EngineError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// Every variant maps to exit code `2`.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine-related error
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
