//! A module for computing shortest-path distances and the metrics derived from them.
//!
//! All-pairs distances are computed with Floyd–Warshall, which is cubic in the order of the
//! graph but trivially correct on the dense matrices this crate works with.

use std::{fmt, ops::Add};

use log::debug;
use nalgebra::DMatrix;

use crate::adjacency::AdjacencyMatrix;

/// The length of a shortest path, in edges.
///
/// The variant order makes `Unreachable` compare greater than any finite distance, so `min`
/// and `max` behave like they would with an infinite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    Finite(usize),
    Unreachable,
}

impl Distance {
    /// Returns whether a path exists.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the number of edges on the path, if one exists.
    pub fn finite(self) -> Option<usize> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }

    /// Returns the number of edges on the path, reporting unreachable pairs as `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::distance::Distance;
    ///
    /// assert_eq!(Distance::Finite(3).or_zero(), 3);
    /// assert_eq!(Distance::Unreachable.or_zero(), 0);
    /// ```
    pub fn or_zero(self) -> usize {
        self.finite().unwrap_or(0)
    }
}

impl Add for Distance {
    type Output = Self;

    /// Joins two paths end to end. The result is unreachable if either part is.
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => {
                a.checked_add(b).map_or(Self::Unreachable, Self::Finite)
            }
            _ => Self::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Unreachable => write!(f, "∞"),
        }
    }
}

/// The distance matrix of a graph along with its eccentricity-derived metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceAnalysis {
    distances: DMatrix<Distance>,
    eccentricities: Vec<Distance>,
    radius: Distance,
    diameter: Distance,
    centers: Vec<usize>,
}

impl DistanceAnalysis {
    /// Returns the radius, or `0` if the graph is disconnected.
    ///
    /// The zero stands in for an undefined radius; use [`raw_radius`](Self::raw_radius) to tell
    /// the two apart.
    pub fn radius(&self) -> usize {
        self.radius.or_zero()
    }

    /// Returns the diameter, or `0` if the graph is disconnected.
    pub fn diameter(&self) -> usize {
        self.diameter.or_zero()
    }

    /// Returns the minimum eccentricity, which is `Unreachable` for a disconnected graph.
    ///
    /// The empty graph has a radius of `Finite(0)`.
    pub fn raw_radius(&self) -> Distance {
        self.radius
    }

    /// Returns the maximum eccentricity, which is `Unreachable` for a disconnected graph.
    pub fn raw_diameter(&self) -> Distance {
        self.diameter
    }

    /// Returns the 0-based vertices whose eccentricity equals the raw radius, in ascending order.
    ///
    /// Every vertex of a disconnected graph has an unreachable eccentricity, so they all are
    /// centers.
    pub fn centers(&self) -> &[usize] {
        &self.centers
    }

    /// Returns the eccentricity of each vertex, indexed by vertex.
    pub fn eccentricities(&self) -> &[Distance] {
        &self.eccentricities
    }

    /// Returns the eccentricity of `vertex`, if it exists.
    pub fn eccentricity(&self, vertex: usize) -> Option<Distance> {
        self.eccentricities.get(vertex).copied()
    }

    /// Returns the shortest-path distance between `u` and `v`, if both exist.
    pub fn distance(&self, u: usize, v: usize) -> Option<Distance> {
        self.distances.get((u, v)).copied()
    }

    /// Returns the full distance matrix.
    pub fn distances(&self) -> &DMatrix<Distance> {
        &self.distances
    }

    /// Returns whether every vertex can reach every other one.
    pub fn is_connected(&self) -> bool {
        self.eccentricities.iter().all(Distance::is_finite)
    }
}

/// Computes all-pairs shortest paths and the radius, diameter and centers of the graph.
///
/// # Examples
///
/// ```
/// use contour::adjacency::AdjacencyMatrix;
/// use contour::distance;
///
/// // A star with three leaves around vertex 0.
/// let graph = AdjacencyMatrix::from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
/// let analysis = distance::analyze(&graph);
///
/// assert_eq!(analysis.radius(), 1);
/// assert_eq!(analysis.diameter(), 2);
/// assert_eq!(analysis.centers(), &[0]);
/// ```
pub fn analyze(graph: &AdjacencyMatrix) -> DistanceAnalysis {
    let distances = shortest_paths(graph);

    // Each row holds at least the zero distance on the diagonal, so it is never empty.
    let eccentricities: Vec<Distance> = distances
        .row_iter()
        .map(|row| row.iter().copied().max().unwrap_or(Distance::Finite(0)))
        .collect();

    let radius = eccentricities
        .iter()
        .copied()
        .min()
        .unwrap_or(Distance::Finite(0));
    let diameter = eccentricities
        .iter()
        .copied()
        .max()
        .unwrap_or(Distance::Finite(0));

    let centers: Vec<usize> = eccentricities
        .iter()
        .enumerate()
        .filter(|(_, &eccentricity)| eccentricity == radius)
        .map(|(vertex, _)| vertex)
        .collect();

    debug!(
        "distance analysis: order {}, radius {}, diameter {}, {} center(s)",
        graph.order(),
        radius,
        diameter,
        centers.len()
    );

    DistanceAnalysis {
        distances,
        eccentricities,
        radius,
        diameter,
        centers,
    }
}

//
// Helpers
//

/// Floyd–Warshall over hop counts.
fn shortest_paths(graph: &AdjacencyMatrix) -> DMatrix<Distance> {
    let n = graph.order();

    let mut distances = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            Distance::Finite(0)
        } else if graph.contains(i, j) {
            Distance::Finite(1)
        } else {
            Distance::Unreachable
        }
    });

    for k in 0..n {
        for i in 0..n {
            let to_k = distances[(i, k)];

            // Nothing can be relaxed through a vertex `i` can't reach.
            if !to_k.is_finite() {
                continue;
            }

            for j in 0..n {
                let through_k = to_k + distances[(k, j)];
                if through_k < distances[(i, j)] {
                    distances[(i, j)] = through_k;
                }
            }
        }
    }

    distances
}
