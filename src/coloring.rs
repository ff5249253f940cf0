//! A module for greedy vertex coloring.
//!
//! The greedy count is an upper bound on the chromatic number, not the chromatic number itself:
//! it depends on the order vertices are visited in, and relabeling a graph can change it.

use std::collections::BTreeSet;

use log::debug;

use crate::adjacency::AdjacencyMatrix;

/// A color assignment, indexed by vertex. Colors are `0, 1, 2, ...`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<usize>,
}

impl Coloring {
    /// Returns the number of distinct colors used, `0` for the empty graph.
    pub fn count(&self) -> usize {
        self.colors.iter().max().map_or(0, |max| max + 1)
    }

    /// Returns the color of `vertex`, if it exists.
    pub fn color(&self, vertex: usize) -> Option<usize> {
        self.colors.get(vertex).copied()
    }

    /// Returns the colors of all vertices.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Returns whether this assignment covers `graph` and gives adjacent vertices different
    /// colors.
    pub fn is_proper(&self, graph: &AdjacencyMatrix) -> bool {
        self.colors.len() == graph.order()
            && graph
                .edges()
                .all(|edge| self.colors[*edge.source()] != self.colors[*edge.target()])
    }
}

/// Colors the vertices in index order, giving each the smallest color none of its already
/// colored neighbours has.
///
/// # Examples
///
/// ```
/// use contour::adjacency::AdjacencyMatrix;
/// use contour::coloring;
///
/// // The path 0-1-2 alternates between two colors.
/// let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// let coloring = coloring::greedy_coloring(&graph);
///
/// assert_eq!(coloring.colors(), &[0, 1, 0]);
/// assert_eq!(coloring.count(), 2);
/// ```
pub fn greedy_coloring(graph: &AdjacencyMatrix) -> Coloring {
    let mut colors: Vec<usize> = Vec::with_capacity(graph.order());

    for vertex in 0..graph.order() {
        // Vertices are colored in order, so only the neighbours below `vertex` have a color yet.
        let taken: BTreeSet<usize> = graph
            .neighbours(vertex)
            .filter_map(|neighbour| colors.get(neighbour).copied())
            .collect();

        let mut color = 0;
        while taken.contains(&color) {
            color += 1;
        }

        colors.push(color);
    }

    let coloring = Coloring { colors };
    debug!(
        "greedy coloring: order {}, {} color(s)",
        graph.order(),
        coloring.count()
    );

    coloring
}

/// Returns the number of colors the greedy strategy needs, an upper bound on the chromatic
/// number.
pub fn color_count(graph: &AdjacencyMatrix) -> usize {
    greedy_coloring(graph).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let coloring = greedy_coloring(&AdjacencyMatrix::new(0));

        assert_eq!(coloring.count(), 0);
        assert!(coloring.colors().is_empty());
    }

    #[test]
    fn edgeless_graph() {
        let coloring = greedy_coloring(&AdjacencyMatrix::new(4));

        assert_eq!(coloring.colors(), &[0, 0, 0, 0]);
        assert_eq!(coloring.count(), 1);
    }

    #[test]
    fn complete() {
        let n = 6;
        let mut graph = AdjacencyMatrix::new(n);
        for i in 0..n {
            for j in i + 1..n {
                graph.insert(i, j).unwrap();
            }
        }

        let coloring = greedy_coloring(&graph);

        assert_eq!(coloring.colors(), &[0, 1, 2, 3, 4, 5]);
        assert!(coloring.is_proper(&graph));
    }

    #[test]
    fn even_cycle() {
        let graph = graph!(6; [0, 1, 2, 3, 4, 5, 0]);

        assert_eq!(color_count(&graph), 2);
    }

    #[test]
    fn odd_cycle() {
        let graph = graph!(5; [0, 1, 2, 3, 4, 0]);
        let coloring = greedy_coloring(&graph);

        assert_eq!(coloring.colors(), &[0, 1, 0, 1, 2]);
        assert_eq!(coloring.count(), 3);
    }

    #[test]
    fn order_dependent_bound() {
        // The path 0-2-3-1 is bipartite, but its two ends are visited first and both get color
        // 0, which forces a third color onto vertex 3.
        let path = graph!(4; [0, 2, 3, 1]);
        assert_eq!(color_count(&path), 3);

        // The same path labeled in order only needs two.
        assert_eq!(color_count(&graph!(4; [0, 1, 2, 3])), 2);
    }

    #[test]
    fn color_lookup() {
        let coloring = greedy_coloring(&graph!(3; [0, 1]));

        assert_eq!(coloring.color(1), Some(1));
        assert_eq!(coloring.color(2), Some(0));
        assert_eq!(coloring.color(3), None);
    }

    #[test]
    fn is_proper_rejects_wrong_order() {
        let coloring = greedy_coloring(&graph!(2; [0, 1]));

        assert!(!coloring.is_proper(&AdjacencyMatrix::new(3)));
    }
}
