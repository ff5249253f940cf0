//! A module for the combined metrics of a graph.

use std::fmt;

use itertools::Itertools;

use crate::{
    adjacency::AdjacencyMatrix,
    batch,
    bridges::BridgeFinder,
    coloring::{self, Coloring},
    distance::{self, DistanceAnalysis},
    edge::Edge,
};

/// The fewest worker threads [`analyze_batch`] will run.
pub const MIN_NUM_THREADS: usize = 1;
/// The most worker threads [`analyze_batch`] will run.
pub const MAX_NUM_THREADS: usize = 128;

/// The structural metrics of one graph.
///
/// Vertices are 0-based; the `one_based_*` accessors and the `Display` implementation shift
/// them to the 1-based numbering used in reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphMetrics {
    radius: usize,
    diameter: usize,
    centers: Vec<usize>,
    bridges: Vec<Edge<usize>>,
    color_count: usize,
}

impl GraphMetrics {
    /// Merges the outputs of the three independent analyses.
    pub fn new(
        distances: &DistanceAnalysis,
        bridges: Vec<Edge<usize>>,
        coloring: &Coloring,
    ) -> Self {
        Self {
            radius: distances.radius(),
            diameter: distances.diameter(),
            centers: distances.centers().to_vec(),
            bridges,
            color_count: coloring.count(),
        }
    }

    /// Returns the radius, `0` if the graph is disconnected or empty.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Returns the diameter, `0` if the graph is disconnected or empty.
    pub fn diameter(&self) -> usize {
        self.diameter
    }

    /// Returns the 0-based center vertices in ascending order.
    pub fn centers(&self) -> &[usize] {
        &self.centers
    }

    /// Returns the bridges in the order the search found them, oriented
    /// `(ancestor, descendant)`.
    pub fn bridges(&self) -> &[Edge<usize>] {
        &self.bridges
    }

    /// Returns the greedy color count, an upper bound on the chromatic number.
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Returns the center vertices numbered from 1.
    pub fn one_based_centers(&self) -> Vec<usize> {
        self.centers.iter().map(|v| v + 1).collect()
    }

    /// Returns the bridges with their endpoints numbered from 1.
    pub fn one_based_bridges(&self) -> Vec<Edge<usize>> {
        self.bridges.iter().map(|edge| edge.map(|v| v + 1)).collect()
    }
}

impl fmt::Display for GraphMetrics {
    /// Renders a report with 1-based vertex numbers, empty lists are shown as `-`.
    ///
    /// Bridges are numbered from 1 like the centers. The legacy report printed bridge endpoints
    /// 0-based; use [`bridges`](GraphMetrics::bridges) for those.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let centers = self.one_based_centers();
        let bridges = self.one_based_bridges();

        writeln!(f, "Diameter: {}", self.diameter)?;
        writeln!(f, "Radius: {}", self.radius)?;
        writeln!(f, "Centers: {}", or_dash(centers.iter().join(", ")))?;
        writeln!(f, "Bridges: {}", or_dash(bridges.iter().join(", ")))?;
        write!(f, "Chromatic number (greedy bound): {}", self.color_count)
    }
}

/// Runs every analysis on the graph and merges the results.
///
/// # Examples
///
/// ```
/// use contour::adjacency::AdjacencyMatrix;
/// use contour::metrics;
///
/// let graph = AdjacencyMatrix::from_edges(2, [(0, 1)]).unwrap();
/// let metrics = metrics::analyze(&graph);
///
/// assert_eq!(metrics.radius(), 1);
/// assert_eq!(metrics.diameter(), 1);
/// assert_eq!(metrics.one_based_centers(), vec![1, 2]);
/// assert_eq!(metrics.bridges()[0].into_tuple(), (0, 1));
/// assert_eq!(metrics.color_count(), 2);
/// ```
pub fn analyze(graph: &AdjacencyMatrix) -> GraphMetrics {
    analyze_with(&mut BridgeFinder::new(), graph)
}

/// Like [`analyze`] but reuses the buffers of an existing [`BridgeFinder`].
pub fn analyze_with(finder: &mut BridgeFinder, graph: &AdjacencyMatrix) -> GraphMetrics {
    let distances = distance::analyze(graph);
    let bridges = finder.find(graph);
    let coloring = coloring::greedy_coloring(graph);

    GraphMetrics::new(&distances, bridges, &coloring)
}

/// Analyses many graphs on a pool of worker threads, returning the metrics in input order.
///
/// `num_threads` is clamped to `MIN_NUM_THREADS..=MAX_NUM_THREADS`.
pub fn analyze_batch(graphs: Vec<AdjacencyMatrix>, num_threads: usize) -> Vec<GraphMetrics> {
    batch::compute_metrics(graphs, num_threads)
}

//
// Helpers
//

fn or_dash(list: String) -> String {
    if list.is_empty() {
        "-".to_string()
    } else {
        list
    }
}
