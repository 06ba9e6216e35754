//! Pointwise activation functions.

use ndarray::Array2;

/// Pointwise activation applied to every entry of a propagated
/// feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Pass values through unchanged.
    Identity,
    /// Rectifier: max(0, x). Clamps negative entries to zero.
    #[default]
    Relu,
}

impl Activation {
    /// Apply to a single value.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Relu => x.max(0.0),
        }
    }

    /// Apply element-wise, producing a new matrix.
    pub fn apply_matrix(&self, m: &Array2<f64>) -> Array2<f64> {
        match self {
            Self::Identity => m.clone(),
            Self::Relu => m.mapv(|x| x.max(0.0)),
        }
    }
}
