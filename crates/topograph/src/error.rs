//! Error types for topograph operations.

use std::io;

use thiserror::Error;

/// The main error type for topograph operations.
///
/// Two classes of failure matter to callers: graph construction errors
/// (violated invariants while declaring the topology) and engine errors
/// (the external Graphviz binary missing or failing). Both are fatal; the
/// tool is a one-shot build step and never retries.
#[derive(Debug, Error)]
pub enum TopographError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rendering engine error: {0}")]
    Engine(String),

    #[error("Export error: {0}")]
    Export(String),
}
