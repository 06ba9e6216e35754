// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

//! Graph structure layer for propago.
//!
//! This crate provides the foundational types the propagation layer
//! (`propago-nn`) consumes:
//!
//! - [`Graph`] - An undirected simple graph over integer node ids
//! - [`GraphStats`] - Basic size/degree statistics
//!
//! Graphs are built from a node list and an edge list and expose a
//! dense adjacency-matrix view. Self-edges are rejected at
//! construction: the adjacency matrix of a raw input graph always has
//! a zero diagonal, and self-loops only appear once the propagation
//! layer injects them.
//!
//! # Example
//!
//! ```rust
//! use propago_core::Graph;
//!
//! let mut g = Graph::new();
//! for id in 1..=4 {
//!     g.add_node(id);
//! }
//! for (a, b) in [(1, 2), (2, 3), (2, 4), (4, 1), (4, 3)] {
//!     g.add_edge(a, b)?;
//! }
//!
//! let adj = g.adjacency_matrix();
//! assert_eq!(adj.dim(), (4, 4));
//! assert_eq!(adj[[0, 1]], 1.0); // 1 -- 2
//! assert_eq!(adj[[0, 0]], 0.0); // no self-edges
//! # Ok::<(), propago_core::Error>(())
//! ```

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{Graph, GraphStats};

// Re-export petgraph for advanced graph operations
pub use petgraph;
