//! Degree-normalized graph convolution.
//!
//! Implements one GCN propagation step over dense matrices:
//!
//! ```text
//! H = sigma(D_hat^{-1} A_hat X W)
//! ```
//!
//! Where:
//! - `A_hat = A + I` is the adjacency matrix with self-loops
//! - `D_hat` is the diagonal degree matrix of `A_hat`
//! - `X` is the node feature matrix (N x F)
//! - `W` is the weight matrix (F x F')
//! - `sigma` is a pointwise [`Activation`]
//!
//! The pipeline is three matrix operations executed once per call:
//!
//! 1. **Aggregate**: `A_hat * X` sums each node's own and neighbors'
//!    feature vectors (one-hop locality).
//! 2. **Normalize**: scale row i by `1 / D_hat(i, i)` so high-degree
//!    nodes are not trivially larger in magnitude. This is a per-row
//!    reciprocal, never a general matrix inverse.
//! 3. **Transform + activate**: project into the new feature space and
//!    apply the activation element-wise.
//!
//! # Reference
//!
//! Kipf & Welling, "Semi-Supervised Classification with Graph
//! Convolutional Networks", ICLR 2017.

use crate::activation::Activation;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use propago_core::Graph;
use rand::prelude::*;
use rand_xorshift::XorShiftRng;

fn shape_of(m: &Array2<f64>) -> String {
    format!("{}x{}", m.nrows(), m.ncols())
}

fn ensure_square(m: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(Error::dims(format!("{rows}x{rows} (square)"), shape_of(m)));
    }
    Ok(rows)
}

/// Reciprocals of the degree-matrix diagonal.
///
/// The single place the zero-degree guard lives: any entry that is not
/// strictly positive (zero, negative, NaN) is rejected instead of
/// silently producing Inf/NaN downstream.
fn inverse_degrees(deg: &Array2<f64>) -> Result<Array1<f64>> {
    let n = ensure_square(deg)?;
    let mut inv = Array1::zeros(n);

    for i in 0..n {
        let d = deg[[i, i]];
        if !(d > 0.0) {
            return Err(Error::SingularDegree { node: i });
        }
        inv[i] = 1.0 / d;
    }

    Ok(inv)
}

/// Scale row i of `m` by `factors[i]`, in place.
fn scale_rows(m: &mut Array2<f64>, factors: &Array1<f64>) {
    for (i, mut row) in m.rows_mut().into_iter().enumerate() {
        row *= factors[i];
    }
}

/// Add self-loops: `A_hat = A + I`.
///
/// Every diagonal entry gains 1; off-diagonal entries are unchanged.
/// Fails with a dimension mismatch if `adj` is not square.
pub fn add_self_loops(adj: &Array2<f64>) -> Result<Array2<f64>> {
    let n = ensure_square(adj)?;
    Ok(adj + &Array2::<f64>::eye(n))
}

/// Diagonal degree matrix of a (self-looped) adjacency.
///
/// `D_hat(i, i)` is the i-th row sum of `adj_hat`; off-diagonal entries
/// are zero. For a self-looped adjacency every diagonal entry is >= 1,
/// which makes the matrix invertible by per-entry reciprocal.
pub fn degree_matrix(adj_hat: &Array2<f64>) -> Result<Array2<f64>> {
    ensure_square(adj_hat)?;
    let degrees = adj_hat.sum_axis(Axis(1));
    Ok(Array2::from_diag(&degrees))
}

/// Row-normalized adjacency: `D_hat^{-1} A_hat`.
///
/// Scales row i of `adj_hat` by the reciprocal of `deg(i, i)` — an O(N)
/// diagonal inversion, not an O(N^3) general one. Fails with a singular
/// degree error if any diagonal entry of `deg` is zero.
pub fn normalized_adjacency(adj_hat: &Array2<f64>, deg: &Array2<f64>) -> Result<Array2<f64>> {
    let n = ensure_square(adj_hat)?;
    let inv = inverse_degrees(deg)?;

    if inv.len() != n {
        return Err(Error::dims(format!("{n}x{n}"), shape_of(deg)));
    }

    let mut out = adj_hat.clone();
    scale_rows(&mut out, &inv);

    Ok(out)
}

/// One GCN propagation step: `H = sigma(D_hat^{-1} A_hat X W)`.
///
/// # Arguments
/// - `adj_hat`: self-looped adjacency (N x N), from [`add_self_loops`]
/// - `deg`: diagonal degree matrix (N x N), from [`degree_matrix`]
/// - `x`: node features (N x F)
/// - `w`: weight matrix (F x F')
/// - `activation`: pointwise function applied to every output entry
///
/// # Returns
/// New node representations (N x F'). Row i depends only on node i and
/// its immediate neighbors' rows of `x`.
///
/// # Errors
/// Dimension mismatch if `adj_hat` and `x` disagree on N, or `x` and
/// `w` disagree on F; singular degree if any `deg` diagonal entry is
/// zero.
pub fn propagate(
    adj_hat: &Array2<f64>,
    deg: &Array2<f64>,
    x: &Array2<f64>,
    w: &Array2<f64>,
    activation: Activation,
) -> Result<Array2<f64>> {
    let n = ensure_square(adj_hat)?;

    if x.nrows() != n {
        return Err(Error::dims(format!("{n} feature rows"), shape_of(x)));
    }
    if w.nrows() != x.ncols() {
        return Err(Error::dims(format!("{} weight rows", x.ncols()), shape_of(w)));
    }

    let inv = inverse_degrees(deg)?;
    if inv.len() != n {
        return Err(Error::dims(format!("{n}x{n}"), shape_of(deg)));
    }

    // Aggregate: A_hat * X
    let mut h = adj_hat.dot(x);

    // Normalize: scale row i by 1 / deg(i, i)
    scale_rows(&mut h, &inv);

    // Transform + activate
    Ok(activation.apply_matrix(&h.dot(w)))
}

/// Graph Convolutional Network layer.
///
/// Owns a fixed weight matrix and an activation, and runs the full
/// pipeline against a [`Graph`]: derive the adjacency matrix, inject
/// self-loops, build the degree matrix, then [`propagate`].
///
/// The output has the right shape to feed straight back in as the next
/// layer's input, so layers compose; no training happens here, weights
/// are either hand-chosen or seeded-random constants.
///
/// # Example
///
/// ```rust
/// use propago_core::Graph;
/// use propago_nn::{Activation, GCNConv};
///
/// let mut g = Graph::new();
/// g.add_edge(1, 2).unwrap();
/// g.add_edge(2, 3).unwrap();
///
/// let layer = GCNConv::new(4, 2, Activation::Relu, 42);
/// let x = ndarray::Array2::ones((3, 4));
/// let h = layer.forward(&g, &x).unwrap();
/// assert_eq!(h.dim(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct GCNConv {
    /// Linear transform (in_features x out_features).
    weight: Array2<f64>,
    /// Pointwise output activation.
    activation: Activation,
}

impl GCNConv {
    /// Create a layer with Glorot-uniform weights from a seeded
    /// generator. Same seed, same weights.
    pub fn new(in_features: usize, out_features: usize, activation: Activation, seed: u64) -> Self {
        let bound = (6.0 / (in_features + out_features) as f64).sqrt();
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let weight =
            Array2::from_shape_fn((in_features, out_features), |_| rng.random_range(-bound..bound));

        Self { weight, activation }
    }

    /// Create a layer from hand-chosen weights.
    pub fn with_weights(weight: Array2<f64>, activation: Activation) -> Self {
        Self { weight, activation }
    }

    /// Input feature dimension.
    pub fn in_features(&self) -> usize {
        self.weight.nrows()
    }

    /// Output feature dimension.
    pub fn out_features(&self) -> usize {
        self.weight.ncols()
    }

    /// The weight matrix.
    pub fn weight(&self) -> &Array2<f64> {
        &self.weight
    }

    /// Forward pass: one propagation step over the graph.
    ///
    /// # Arguments
    /// - `graph`: graph structure; adjacency rows follow its node
    ///   insertion order
    /// - `x`: node features (N x in_features), row i for the i-th
    ///   inserted node
    ///
    /// # Returns
    /// Node representations (N x out_features).
    pub fn forward(&self, graph: &Graph, x: &Array2<f64>) -> Result<Array2<f64>> {
        let adj_hat = add_self_loops(&graph.adjacency_matrix())?;
        let deg = degree_matrix(&adj_hat)?;
        propagate(&adj_hat, &deg, x, &self.weight, self.activation)
    }
}
