use std::path::PathBuf;

use thiserror::Error;

/// Conditions a handler raises instead of returning normally.
///
/// Display text is the description printed by the top-level catch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Fatal Error: {0}")]
    Fatal(String),
    #[error("Unknown message: {0}")]
    UnknownMessage(String),
}

impl ChainError {
    /// Text of the message that raised the condition.
    pub fn text(&self) -> &str {
        match self {
            ChainError::Fatal(t) | ChainError::UnknownMessage(t) => t,
        }
    }
}

/// File output failures. Recovered inside the error handler, never propagated
/// through the chain.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("chain has no handlers")]
    EmptyChain,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
