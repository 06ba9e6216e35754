//! Error types for the graph structure layer.

use thiserror::Error;

/// Structure-layer error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw input graphs are simple: an edge from a node to itself is
    /// rejected here. Self-loops only ever enter through the
    /// propagation layer, which adds them synthetically.
    #[error("self-loop rejected: node {0} cannot connect to itself")]
    SelfLoop(u32),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
