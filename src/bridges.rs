//! A module for finding bridges (cut-edges), the edges whose removal disconnects part of the
//! graph.
//!
//! This is Tarjan's low-link depth-first search. The traversal keeps its own stack of frames
//! rather than recursing so the depth of the search is bounded by memory, not the call stack.

use log::{debug, trace};

use crate::{adjacency::AdjacencyMatrix, edge::Edge};

/// A vertex being explored, with the next neighbour index to look at.
#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    cursor: usize,
}

/// Reusable scratch state for bridge searches.
///
/// The buffers are reset at the start of every [`find`](Self::find) call, so one finder can be
/// reused across graphs without results leaking between calls. Searching requires `&mut self`;
/// concurrent searches each need their own finder.
#[derive(Clone, Debug, Default)]
pub struct BridgeFinder {
    visited: Vec<bool>,
    /// Discovery time of each vertex.
    discovery: Vec<usize>,
    /// Lowest discovery time reachable from the vertex's subtree through at most one back-edge.
    low_link: Vec<usize>,
    timer: usize,
    stack: Vec<Frame>,
}

impl BridgeFinder {
    /// Creates a finder with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bridges of the graph.
    ///
    /// Each bridge is oriented `(ancestor, descendant)` as found by the search, and bridges are
    /// listed in the order their subtree finished, not sorted. Searches start from every
    /// unvisited vertex in ascending order and visit neighbours in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::adjacency::AdjacencyMatrix;
    /// use contour::bridges::BridgeFinder;
    ///
    /// // A triangle 0-1-2 with a tail 2-3.
    /// let graph = AdjacencyMatrix::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
    ///
    /// let mut finder = BridgeFinder::new();
    /// let bridges = finder.find(&graph);
    ///
    /// assert_eq!(bridges.len(), 1);
    /// assert_eq!(bridges[0].into_tuple(), (2, 3));
    /// ```
    pub fn find(&mut self, graph: &AdjacencyMatrix) -> Vec<Edge<usize>> {
        self.reset(graph.order());

        let mut bridges = Vec::new();
        for root in 0..graph.order() {
            if !self.visited[root] {
                self.search(graph, root, &mut bridges);
            }
        }

        debug!(
            "bridge search: order {}, {} bridge(s)",
            graph.order(),
            bridges.len()
        );

        bridges
    }

    //
    // Private
    //

    /// Clears every buffer and sizes them for a graph of the given order.
    fn reset(&mut self, order: usize) {
        self.visited.clear();
        self.visited.resize(order, false);
        self.discovery.clear();
        self.discovery.resize(order, 0);
        self.low_link.clear();
        self.low_link.resize(order, 0);
        self.timer = 0;
        self.stack.clear();
    }

    /// Timestamps `vertex` and pushes it onto the stack.
    fn enter(&mut self, vertex: usize, parent: Option<usize>) {
        self.visited[vertex] = true;
        self.discovery[vertex] = self.timer;
        self.low_link[vertex] = self.timer;
        self.timer += 1;

        self.stack.push(Frame {
            vertex,
            parent,
            cursor: 0,
        });
    }

    /// Explores the component containing `root`.
    fn search(&mut self, graph: &AdjacencyMatrix, root: usize, bridges: &mut Vec<Edge<usize>>) {
        self.enter(root, None);

        while let Some(frame) = self.stack.last_mut() {
            let Frame { vertex, parent, .. } = *frame;
            let next = graph.next_neighbour(vertex, frame.cursor);

            if let Some(to) = next {
                frame.cursor = to + 1;

                // Don't walk back along the tree edge we arrived by.
                if Some(to) == parent {
                    continue;
                }

                if self.visited[to] {
                    self.low_link[vertex] = self.low_link[vertex].min(self.discovery[to]);
                } else {
                    self.enter(to, Some(vertex));
                }

                continue;
            }

            // All neighbours are done, fold this subtree's low-link into the parent.
            self.stack.pop();

            if let Some(parent) = parent {
                self.low_link[parent] = self.low_link[parent].min(self.low_link[vertex]);

                if self.low_link[vertex] > self.discovery[parent] {
                    trace!("bridge {parent}-{vertex}");
                    bridges.push(Edge::new(parent, vertex));
                }
            }
        }
    }
}

/// Returns the bridges of the graph using a fresh [`BridgeFinder`].
pub fn find_bridges(graph: &AdjacencyMatrix) -> Vec<Edge<usize>> {
    BridgeFinder::new().find(graph)
}
