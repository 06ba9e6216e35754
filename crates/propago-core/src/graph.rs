use crate::{Error, Result};
use ndarray::Array2;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An undirected simple graph over integer node ids.
///
/// Uses petgraph's undirected graph internally for traversal and keeps
/// an id index for O(1) node lookup. No self-edges and no parallel
/// edges: the graph stays a plain 0/1 structure so that the adjacency
/// matrix it yields is symmetric with a zero diagonal.
///
/// # Example
///
/// ```rust
/// use propago_core::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge(1, 2)?;
/// g.add_edge(2, 3)?;
///
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.degree(2), 2);
/// # Ok::<(), propago_core::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// The underlying undirected graph; node weights are the caller ids.
    graph: UnGraph<u32, ()>,

    /// Map from node id to node index.
    node_index: HashMap<u32, NodeIndex>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_index: HashMap::new(),
        }
    }

    /// Create a graph with estimated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            node_index: HashMap::with_capacity(nodes),
        }
    }

    /// Add a node, or return the existing one for this id.
    pub fn add_node(&mut self, id: u32) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }

        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        idx
    }

    /// Add an undirected edge between two nodes, creating missing
    /// endpoints. Duplicate edges are ignored; self-edges are rejected.
    pub fn add_edge(&mut self, a: u32, b: u32) -> Result<()> {
        if a == b {
            return Err(Error::SelfLoop(a));
        }

        let a_idx = self.add_node(a);
        let b_idx = self.add_node(b);

        if self.graph.find_edge(a_idx, b_idx).is_none() {
            self.graph.add_edge(a_idx, b_idx, ());
        }

        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node ids in insertion order. Adjacency-matrix rows follow this
    /// ordering.
    pub fn node_ids(&self) -> Vec<u32> {
        self.graph.node_weights().copied().collect()
    }

    /// Check whether an edge exists between two ids. O(d).
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        let (Some(&a_idx), Some(&b_idx)) = (self.node_index.get(&a), self.node_index.get(&b))
        else {
            return false;
        };

        self.graph.find_edge(a_idx, b_idx).is_some()
    }

    /// Neighbor ids of a node. O(d). Unknown ids yield an empty list.
    pub fn neighbors(&self, id: u32) -> Vec<u32> {
        match self.node_index.get(&id) {
            Some(&idx) => self.graph.neighbors(idx).map(|n| self.graph[n]).collect(),
            None => vec![],
        }
    }

    /// Degree of a node, not counting any synthetic self-loop. O(d).
    pub fn degree(&self, id: u32) -> usize {
        match self.node_index.get(&id) {
            Some(&idx) => self.graph.neighbors(idx).count(),
            None => 0,
        }
    }

    /// Dense adjacency matrix: entry (i, j) is 1.0 iff the i-th and
    /// j-th inserted nodes are connected. Symmetric, zero diagonal.
    pub fn adjacency_matrix(&self) -> Array2<f64> {
        let n = self.graph.node_count();
        let mut adj = Array2::zeros((n, n));

        for edge_idx in self.graph.edge_indices() {
            if let Some((a, b)) = self.graph.edge_endpoints(edge_idx) {
                adj[[a.index(), b.index()]] = 1.0;
                adj[[b.index(), a.index()]] = 1.0;
            }
        }

        adj
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &UnGraph<u32, ()> {
        &self.graph
    }

    /// Compute statistics about the graph.
    pub fn stats(&self) -> GraphStats {
        let node_count = self.node_count();
        let edge_count = self.edge_count();

        let avg_degree = if node_count > 0 {
            2.0 * edge_count as f64 / node_count as f64
        } else {
            0.0
        };

        GraphStats {
            node_count,
            edge_count,
            avg_degree,
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Average degree (2E / N).
    pub avg_degree: f64,
}
