use std::collections::HashSet;

use contour::{
    adjacency::AdjacencyMatrix,
    bridges::{find_bridges, BridgeFinder},
    coloring,
    distance::{self, Distance},
    edge::Edge,
    metrics,
};
use proptest::prelude::*;

const MAX_ORDER: usize = 12;

/// An arbitrary simple graph, one bit per vertex pair of the upper triangle.
fn arb_graph() -> impl Strategy<Value = AdjacencyMatrix> {
    (0..=MAX_ORDER)
        .prop_flat_map(|n| {
            let pairs = n * n.saturating_sub(1) / 2;
            (Just(n), proptest::collection::vec(any::<bool>(), pairs))
        })
        .prop_map(|(n, bits)| {
            let mut graph = AdjacencyMatrix::new(n);
            let pairs = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j)));

            for ((i, j), present) in pairs.zip(bits) {
                if present {
                    graph.insert(i, j).unwrap();
                }
            }

            graph
        })
}

/// An arbitrary graph along with a relabeling of its vertices.
fn arb_relabeled_graph() -> impl Strategy<Value = (AdjacencyMatrix, Vec<usize>)> {
    arb_graph().prop_flat_map(|graph| {
        let identity: Vec<usize> = (0..graph.order()).collect();
        (Just(graph), Just(identity).prop_shuffle())
    })
}

fn relabel(graph: &AdjacencyMatrix, permutation: &[usize]) -> AdjacencyMatrix {
    let edges = graph.edges().map(|edge| edge.map(|v| permutation[v]));

    AdjacencyMatrix::from_edges(graph.order(), edges).unwrap()
}

proptest! {
    #[test]
    fn radius_at_most_diameter(graph in arb_graph()) {
        let analysis = distance::analyze(&graph);

        prop_assert!(analysis.radius() <= analysis.diameter());
        prop_assert!(analysis.raw_radius() <= analysis.raw_diameter());
    }

    #[test]
    fn non_empty_graphs_have_centers_and_colors(graph in arb_graph()) {
        let metrics = metrics::analyze(&graph);

        if graph.order() > 0 {
            prop_assert!(!metrics.centers().is_empty());
            prop_assert!(metrics.color_count() >= 1);
        } else {
            prop_assert!(metrics.centers().is_empty());
            prop_assert_eq!(metrics.color_count(), 0);
        }
    }

    #[test]
    fn centers_attain_the_radius(graph in arb_graph()) {
        let analysis = distance::analyze(&graph);

        for vertex in 0..graph.order() {
            let is_center = analysis.centers().contains(&vertex);
            prop_assert_eq!(
                is_center,
                analysis.eccentricity(vertex) == Some(analysis.raw_radius())
            );
        }
    }

    #[test]
    fn greedy_coloring_is_proper(graph in arb_graph()) {
        let coloring = coloring::greedy_coloring(&graph);

        prop_assert!(coloring.is_proper(&graph));
        // Greedy never needs more than one color above the maximum degree.
        let max_degree = (0..graph.order())
            .map(|v| graph.neighbours(v).count())
            .max()
            .unwrap_or(0);
        prop_assert!(coloring.count() <= max_degree + 1);
    }

    #[test]
    fn bridges_disconnect_their_endpoints(graph in arb_graph()) {
        let bridges: HashSet<Edge<usize>> = find_bridges(&graph).into_iter().collect();

        // Brute force: an edge is a bridge iff removing it leaves its endpoints unreachable
        // from each other.
        for edge in graph.edges() {
            let (u, v) = edge.into_tuple();
            let mut without = graph.clone();
            without.remove(u, v);

            let separated =
                distance::analyze(&without).distance(u, v) == Some(Distance::Unreachable);
            prop_assert_eq!(bridges.contains(&edge), separated, "edge {}", edge);
        }
    }

    #[test]
    fn relabeling_keeps_distances_and_bridges((graph, permutation) in arb_relabeled_graph()) {
        let relabeled = relabel(&graph, &permutation);

        let before = metrics::analyze(&graph);
        let after = metrics::analyze(&relabeled);

        prop_assert_eq!(before.radius(), after.radius());
        prop_assert_eq!(before.diameter(), after.diameter());

        let moved: HashSet<Edge<usize>> = before
            .bridges()
            .iter()
            .map(|edge| edge.map(|v| permutation[v]))
            .collect();
        let found: HashSet<Edge<usize>> = after.bridges().iter().copied().collect();
        prop_assert_eq!(moved, found);

        let moved_centers: HashSet<usize> =
            before.centers().iter().map(|&v| permutation[v]).collect();
        let found_centers: HashSet<usize> = after.centers().iter().copied().collect();
        prop_assert_eq!(moved_centers, found_centers);
    }

    #[test]
    fn repeated_searches_agree(graph in arb_graph()) {
        let mut finder = BridgeFinder::new();

        let first: Vec<(usize, usize)> =
            finder.find(&graph).into_iter().map(Edge::into_tuple).collect();
        let second: Vec<(usize, usize)> =
            finder.find(&graph).into_iter().map(Edge::into_tuple).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(metrics::analyze(&graph), metrics::analyze(&graph));
    }
}
