//! Error types for sirrank-core.

use thiserror::Error;

/// Error type for graph loading, ranking, and simulation operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (unreadable edge-list file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced node does not exist in the graph.
    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),

    /// A probability parameter is outside [0, 1].
    #[error("Invalid probability {name}={value}: must be in [0, 1]")]
    InvalidProbability {
        /// Parameter name (e.g. `infection_prob`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for sirrank-core operations.
pub type Result<T> = std::result::Result<T, Error>;
