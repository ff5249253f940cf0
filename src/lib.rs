//! Contour is a small toolkit for computing structural metrics of undirected graphs given as
//! dense adjacency matrices.
//!
//! # Basic usage
//!
//! The library is centered around the [`AdjacencyMatrix`](adjacency::AdjacencyMatrix)
//! structure, which validates its input on construction. Three independent analyses run on it:
//!
//! - [`distance`] computes all-pairs shortest paths and the radius, diameter and centers,
//! - [`bridges`] finds the cut-edges,
//! - [`coloring`] computes a greedy coloring, an upper bound on the chromatic number.
//!
//! [`metrics::analyze`] runs all three and merges them into a
//! [`GraphMetrics`](metrics::GraphMetrics) record.
//!
//! ```rust
//! use contour::adjacency::AdjacencyMatrix;
//! use contour::metrics;
//!
//! // A triangle with a pendant vertex hanging off vertex 2.
//! let graph = AdjacencyMatrix::try_from(vec![
//!     vec![0u8, 1, 1, 0],
//!     vec![1, 0, 1, 0],
//!     vec![1, 1, 0, 1],
//!     vec![0, 0, 1, 0],
//! ])
//! .unwrap();
//!
//! let metrics = metrics::analyze(&graph);
//!
//! assert_eq!(metrics.radius(), 1);
//! assert_eq!(metrics.diameter(), 2);
//! assert_eq!(metrics.centers(), &[2]);
//! assert_eq!(metrics.bridges()[0].into_tuple(), (2, 3));
//! assert_eq!(metrics.color_count(), 3);
//!
//! // Reports use 1-based vertex numbers...
//! println!("{metrics}");
//! // ...outputs:
//! // Diameter: 2
//! // Radius: 1
//! // Centers: 3
//! // Bridges: 3-4
//! // Chromatic number (greedy bound): 3
//! ```
//!
//! Disconnected graphs have no finite radius or diameter; both are reported as `0`. The
//! unclamped values are available from [`distance::DistanceAnalysis`].

/// Builds a graph of the given order from one or more vertex paths, e.g.
/// `graph!(4; [0, 1, 2], [1, 3])`.
#[cfg(test)]
macro_rules! graph {
    ($order:expr; $($path:expr),* $(,)?) => {{
        let mut graph = $crate::adjacency::AdjacencyMatrix::new($order);

        $(
            let mut iter = $path.into_iter().peekable();
            while let (Some(a), Some(&b)) = (iter.next(), iter.peek()) {
                graph.insert(a, b).unwrap();
            }
        )*

        graph
    }};
}

mod batch;
pub mod adjacency;
pub mod bridges;
pub mod coloring;
pub mod distance;
pub mod edge;
pub mod error;
pub mod metrics;
