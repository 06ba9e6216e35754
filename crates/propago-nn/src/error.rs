//! Error types for propago-nn.

use thiserror::Error;

/// Propagation error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand shapes don't line up. Shapes are formatted "rows x cols".
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: String, got: String },

    /// A degree-matrix diagonal entry is zero (or not a positive
    /// number), so its reciprocal would be undefined. Cannot happen for
    /// a degree matrix built from a self-looped adjacency.
    #[error("singular degree matrix: node {node} has degree zero")]
    SingularDegree { node: usize },
}

impl Error {
    pub(crate) fn dims(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
