//! Error types for the Statue quality-check orchestrator.

use thiserror::Error;

/// Resolution errors raised by the planning engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unknown context: \"{0}\"")]
    UnknownContext(String),

    #[error("Cyclic context inheritance detected at \"{0}\"")]
    CyclicContext(String),

    #[error("Could not find command named \"{0}\"")]
    UnknownCommand(String),
}

/// Top-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum StatueError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("History error: {0}")]
    CacheError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for StatueError {
    fn from(err: config::ConfigError) -> Self {
        StatueError::ConfigError(err.to_string())
    }
}
