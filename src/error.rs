//! Errors raised when constructing an adjacency matrix.

/// The reasons a grid of cells can be rejected as an undirected, loop-free graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGraphError {
    #[error("adjacency matrix must be square, got {rows} rows and {columns} columns")]
    NotSquare { rows: usize, columns: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {column}) holds {value}, expected 0 or 1")]
    InvalidCell {
        row: usize,
        column: usize,
        value: u8,
    },
    #[error("vertex {vertex} has a self-loop")]
    SelfLoop { vertex: usize },
    #[error("cell ({row}, {column}) differs from its mirror ({column}, {row})")]
    Asymmetric { row: usize, column: usize },
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },
}
