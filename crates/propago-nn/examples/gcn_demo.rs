//! GCN Propagation Demo
//!
//! Walks the 4-node example graph through one full propagation step:
//! adjacency, self-loops, degree normalization, projection, ReLU.
//!
//! ```bash
//! cargo run --example gcn_demo
//! ```

use ndarray::array;
use propago_core::Graph;
use propago_nn::{add_self_loops, degree_matrix, propagate, Activation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("GCN Propagation Demo");
    println!("====================\n");

    // Build the 4-node graph
    let edges = [(1, 2), (2, 3), (2, 4), (4, 1), (4, 3)];
    let mut g = Graph::new();
    for (a, b) in edges {
        g.add_edge(a, b)?;
    }

    println!("Graph: {} nodes, {} edges", g.node_count(), g.edge_count());
    for (a, b) in edges {
        println!("  {} -- {}", a, b);
    }

    let adj = g.adjacency_matrix();
    println!("\nAdjacency matrix A:\n{adj}");

    // One feature pair per node
    let x = array![[0.0, 0.0], [1.0, -1.0], [2.0, -2.0], [3.0, -3.0]];
    println!("Features X:\n{x}");

    // Raw aggregate: each node sums its neighbors (no self yet)
    println!("Plain aggregate A*X:\n{}", adj.dot(&x));

    // Self-loops so every node keeps its own features in the sum
    let adj_hat = add_self_loops(&adj)?;
    println!("Self-looped A_hat = A + I:\n{adj_hat}");

    let deg = degree_matrix(&adj_hat)?;
    println!("Degree matrix D_hat (diagonal):\n{}", deg.diag());

    // Hand-chosen weights: project onto the (f0 - f1) direction and back
    let w = array![[1.0, -1.0], [-1.0, 1.0]];

    let h = propagate(&adj_hat, &deg, &x, &w, Activation::Identity)?;
    println!("\nIdentity activation, H = D_hat^-1 A_hat X W:\n{h}");

    let h = propagate(&adj_hat, &deg, &x, &w, Activation::Relu)?;
    println!("ReLU activation, negatives clamped:\n{h}");

    Ok(())
}
