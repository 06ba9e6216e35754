#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

//! GCN feature propagation over dense matrices.
//!
//! `propago-nn` implements one layer of Graph Convolutional Network
//! propagation: self-loop injection, degree normalization, linear
//! projection, and a pointwise activation. It sits between the
//! structure layer (`propago-core`) and application code.
//!
//! # Modules
//!
//! - [`conv`]: the propagation pipeline ([`add_self_loops`],
//!   [`degree_matrix`], [`propagate`]) and the [`GCNConv`] layer
//! - [`activation`]: pointwise activations (identity, ReLU)
//! - [`error`]: dimension and singular-degree errors
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use propago_core::Graph;
//! use propago_nn::{Activation, GCNConv};
//!
//! // 4-node graph: 1-2, 2-3, 2-4, 4-1, 4-3
//! let mut g = Graph::new();
//! for (a, b) in [(1, 2), (2, 3), (2, 4), (4, 1), (4, 3)] {
//!     g.add_edge(a, b)?;
//! }
//!
//! // One feature pair per node
//! let x = array![[0.0, 0.0], [1.0, -1.0], [2.0, -2.0], [3.0, -3.0]];
//! let w = array![[1.0, -1.0], [-1.0, 1.0]];
//!
//! let layer = GCNConv::with_weights(w, Activation::Relu);
//! let h = layer.forward(&g, &x)?;
//!
//! assert_eq!(h.dim(), (4, 2));
//! assert!(h.iter().all(|&v| v >= 0.0)); // rectified
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod activation;
pub mod conv;
pub mod error;

pub use activation::Activation;
pub use conv::{add_self_loops, degree_matrix, normalized_adjacency, propagate, GCNConv};
pub use error::{Error, Result};
