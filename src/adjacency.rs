//! A module for working with adjacency matrices.

use nalgebra::DMatrix;

use crate::{edge::Edge, error::InvalidGraphError};

/// A finite, undirected, loop-free graph stored as a dense boolean adjacency matrix.
///
/// Vertices are the indices `0..order`. Every constructor checks that the matrix is square,
/// symmetric and has an empty diagonal, so a value of this type always describes a valid simple
/// graph and the analyses never need to re-validate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    matrix: DMatrix<bool>,
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

impl AdjacencyMatrix {
    /// Creates a graph of the given order without any edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::new(3);
    ///
    /// assert_eq!(graph.order(), 3);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    pub fn new(order: usize) -> Self {
        Self {
            matrix: DMatrix::from_element(order, order, false),
        }
    }

    /// Creates a graph of the given order from a list of edges.
    ///
    /// Duplicate edges, in either orientation, are inserted once.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
    /// assert_eq!(graph.edge_count(), 2);
    ///
    /// // Vertex 3 doesn't exist in a graph of order 3.
    /// assert!(AdjacencyMatrix::from_edges(3, [(0, 3)]).is_err());
    /// ```
    pub fn from_edges<I, E>(order: usize, edges: I) -> Result<Self, InvalidGraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<usize>>,
    {
        let mut graph = Self::new(order);
        for edge in edges {
            let (source, target) = edge.into().into_tuple();
            graph.insert(source, target)?;
        }

        Ok(graph)
    }

    /// Builds a graph from raw editor cells, applying the editor's input policy: any nonzero
    /// cell counts as an edge and diagonal cells are forced to zero.
    ///
    /// The grid must still be square and symmetric, mirrored cells aren't filled in.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::coerce(&[
    ///     vec![7, 5],
    ///     vec![-1, 0],
    /// ])
    /// .unwrap();
    ///
    /// assert!(graph.contains(0, 1));
    /// assert!(!graph.contains(0, 0));
    /// ```
    pub fn coerce(rows: &[Vec<i64>]) -> Result<Self, InvalidGraphError> {
        let columns = check_rows(rows)?;
        let cells = DMatrix::from_fn(rows.len(), columns, |i, j| {
            u8::from(i != j && rows[i][j] != 0)
        });

        Self::try_from(cells)
    }

    /// Returns the number of vertices.
    pub fn order(&self) -> usize {
        self.matrix.nrows()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        // Each edge is stored in both triangles.
        self.matrix.iter().filter(|&&cell| cell).count() / 2
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// Graphs with fewer than two vertices have no possible edges, the result is then `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (0, 2)]).unwrap();
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.order() as f64;
        let ec = self.edge_count() as f64;

        let pec = vc * (vc - 1.0) / 2.0;
        ec / pec
    }

    /// Returns whether `u` and `v` are adjacent. Out of range vertices are never adjacent.
    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.matrix.get((u, v)).copied().unwrap_or(false)
    }

    /// Inserts the edge `u-v` and returns whether it was absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    /// use contour::error::InvalidGraphError;
    ///
    /// let mut graph = AdjacencyMatrix::new(2);
    ///
    /// assert_eq!(graph.insert(0, 1), Ok(true));
    /// assert_eq!(graph.insert(1, 0), Ok(false));
    /// assert_eq!(graph.insert(1, 1), Err(InvalidGraphError::SelfLoop { vertex: 1 }));
    /// ```
    pub fn insert(&mut self, u: usize, v: usize) -> Result<bool, InvalidGraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(InvalidGraphError::SelfLoop { vertex: u });
        }

        let is_inserted = !self.matrix[(u, v)];

        // Both triangles are written so the matrix stays symmetric.
        self.matrix[(u, v)] = true;
        self.matrix[(v, u)] = true;

        Ok(is_inserted)
    }

    /// Removes the edge `u-v` and returns whether it was present.
    pub fn remove(&mut self, u: usize, v: usize) -> bool {
        let is_removed = self.contains(u, v);

        if is_removed {
            self.matrix[(u, v)] = false;
            self.matrix[(v, u)] = false;
        }

        is_removed
    }

    /// Returns the neighbours of `vertex` in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.order()).filter(move |&j| self.matrix[(vertex, j)])
    }

    /// Returns every edge once, oriented from the lower to the higher vertex, in row-major
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    /// use contour::edge::Edge;
    ///
    /// let graph = AdjacencyMatrix::from_edges(3, [(2, 0), (1, 0)]).unwrap();
    /// let edges: Vec<Edge<usize>> = graph.edges().collect();
    ///
    /// assert_eq!(edges[0].into_tuple(), (0, 1));
    /// assert_eq!(edges[1].into_tuple(), (0, 2));
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Edge<usize>> + '_ {
        let n = self.order();
        (0..n).flat_map(move |i| {
            (i + 1..n)
                .filter(move |&j| self.matrix[(i, j)])
                .map(move |j| Edge::new(i, j))
        })
    }

    /// Returns the underlying boolean matrix.
    pub fn as_matrix(&self) -> &DMatrix<bool> {
        &self.matrix
    }

    //
    // Crate
    //

    /// Returns the first neighbour of `vertex` with an index of at least `from`.
    pub(crate) fn next_neighbour(&self, vertex: usize, from: usize) -> Option<usize> {
        (from..self.order()).find(|&j| self.matrix[(vertex, j)])
    }

    //
    // Private
    //

    fn check_vertex(&self, vertex: usize) -> Result<(), InvalidGraphError> {
        let order = self.order();
        if vertex >= order {
            return Err(InvalidGraphError::VertexOutOfRange { vertex, order });
        }

        Ok(())
    }
}

//
// Trait implementations
//

impl TryFrom<DMatrix<u8>> for AdjacencyMatrix {
    type Error = InvalidGraphError;

    /// Validates a matrix of `0`/`1` cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    /// use nalgebra::dmatrix;
    ///
    /// let cells = dmatrix![0u8, 1;
    ///                      1, 0];
    /// let graph = AdjacencyMatrix::try_from(cells).unwrap();
    ///
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    fn try_from(cells: DMatrix<u8>) -> Result<Self, Self::Error> {
        let (rows, columns) = cells.shape();
        if rows != columns {
            return Err(InvalidGraphError::NotSquare { rows, columns });
        }

        // Cell values are checked in a first pass so a bad mirror cell is reported as such and
        // not as an asymmetry.
        for row in 0..rows {
            for column in 0..columns {
                let value = cells[(row, column)];
                if value > 1 {
                    return Err(InvalidGraphError::InvalidCell { row, column, value });
                }
            }
        }

        for row in 0..rows {
            if cells[(row, row)] != 0 {
                return Err(InvalidGraphError::SelfLoop { vertex: row });
            }

            for column in row + 1..columns {
                if cells[(row, column)] != cells[(column, row)] {
                    return Err(InvalidGraphError::Asymmetric { row, column });
                }
            }
        }

        Ok(Self {
            matrix: cells.map(|cell| cell == 1),
        })
    }
}

impl TryFrom<Vec<Vec<u8>>> for AdjacencyMatrix {
    type Error = InvalidGraphError;

    /// Validates a row-major grid of `0`/`1` cells.
    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let columns = check_rows(&rows)?;
        let cells = DMatrix::from_fn(rows.len(), columns, |i, j| rows[i][j]);

        Self::try_from(cells)
    }
}

//
// Helpers
//

/// Checks every row has the same length and returns it.
fn check_rows<T>(rows: &[Vec<T>]) -> Result<usize, InvalidGraphError> {
    let expected = rows.first().map_or(0, Vec::len);

    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(InvalidGraphError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }

    Ok(expected)
}
