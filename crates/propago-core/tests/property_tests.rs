//! Property-based tests for propago graph types.
//!
//! These tests verify invariants that should hold for any input graph:
//! - Adjacency symmetry and zero diagonal
//! - Degree / adjacency consistency
//! - Serialization roundtrips

use proptest::prelude::*;
use propago_core::Graph;

/// Generate arbitrary edge lists over a small id space. Self-pairs are
/// filtered out since `add_edge` rejects them by contract.
fn arb_edges() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..12, 0u32..12), 0..40)
        .prop_map(|pairs| pairs.into_iter().filter(|(a, b)| a != b).collect())
}

fn build_graph(edges: &[(u32, u32)]) -> Graph {
    let mut g = Graph::new();
    for &(a, b) in edges {
        g.add_edge(a, b).expect("non-self edge must be accepted");
    }
    g
}

mod graph_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn adjacency_is_symmetric_with_zero_diagonal(edges in arb_edges()) {
            let g = build_graph(&edges);
            let adj = g.adjacency_matrix();
            let n = g.node_count();

            prop_assert_eq!(adj.dim(), (n, n));
            for i in 0..n {
                prop_assert_eq!(adj[[i, i]], 0.0, "diagonal entry {} not zero", i);
                for j in 0..n {
                    prop_assert_eq!(
                        adj[[i, j]], adj[[j, i]],
                        "asymmetry at ({}, {})", i, j
                    );
                    prop_assert!(
                        adj[[i, j]] == 0.0 || adj[[i, j]] == 1.0,
                        "non-binary entry {} at ({}, {})", adj[[i, j]], i, j
                    );
                }
            }
        }

        #[test]
        fn row_sums_match_degrees(edges in arb_edges()) {
            let g = build_graph(&edges);
            let adj = g.adjacency_matrix();

            for (i, id) in g.node_ids().into_iter().enumerate() {
                let row_sum: f64 = adj.row(i).sum();
                prop_assert_eq!(
                    row_sum as usize, g.degree(id),
                    "row sum disagrees with degree for node {}", id
                );
            }
        }

        #[test]
        fn edge_count_matches_adjacency(edges in arb_edges()) {
            let g = build_graph(&edges);
            let adj = g.adjacency_matrix();

            let ones: f64 = adj.sum();
            // Each undirected edge contributes two entries.
            prop_assert_eq!(ones as usize, 2 * g.edge_count());
        }

        #[test]
        fn json_roundtrip_preserves_structure(edges in arb_edges()) {
            let g = build_graph(&edges);

            let json = serde_json::to_string(&g).expect("serialize");
            let loaded: Graph = serde_json::from_str(&json).expect("deserialize");

            prop_assert_eq!(loaded.node_count(), g.node_count());
            prop_assert_eq!(loaded.edge_count(), g.edge_count());
            prop_assert_eq!(loaded.node_ids(), g.node_ids());
            prop_assert_eq!(loaded.adjacency_matrix(), g.adjacency_matrix());
        }
    }
}
