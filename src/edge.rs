//! A module for working with edges.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A pair of vertices joined by an undirected edge.
///
/// Equality and hashing ignore the orientation, `(a, b)` and `(b, a)` are the same edge. The
/// orientation is still kept so callers can tell which endpoint was reached first during a
/// traversal: bridges are reported as `(ancestor, descendant)`.
#[derive(Clone, Copy, Debug, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    /// assert_eq!(edge, Edge::new(1, 0));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Returns the vertex the edge was discovered from.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the vertex the edge leads to.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns whether the edge is incident to the given vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::edge::Edge;
    ///
    /// let edge = Edge::new(2, 5);
    ///
    /// assert!(edge.contains(&2));
    /// assert!(edge.contains(&5));
    /// assert!(!edge.contains(&3));
    /// ```
    pub fn contains(&self, vertex: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }

    /// Applies `f` to both endpoints, keeping the orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use contour::edge::Edge;
    ///
    /// // Shift to the 1-based numbering used in reports.
    /// let edge = Edge::new(0, 3).map(|v| v + 1);
    /// assert_eq!(edge.into_tuple(), (1, 4));
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Edge<U>
    where
        F: FnMut(T) -> U,
    {
        Edge::new(f(self.source), f(self.target))
    }

    /// Consumes the edge, returning its `(source, target)` pair.
    pub fn into_tuple(self) -> (T, T) {
        (self.source, self.target)
    }
}

//
// Trait implementations
//

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.source, &self.target);
        let (c, d) = (&other.source, &other.target);

        a == d && b == c || a == c && b == d
    }
}

impl<T: Hash + Ord> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = (&self.source, &self.target);

        // (a, b) and (b, a) must hash identically since they compare equal.
        match a.cmp(b) {
            Ordering::Greater => {
                b.hash(state);
                a.hash(state);
            }
            _ => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, target): (T, T)) -> Self {
        Self::new(source, target)
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}
