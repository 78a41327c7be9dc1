use crate::graphs::edges::ReadEdges;

/// Core abstraction for finite undirected graphs with set adjacency.
///
/// Each vertex has a set of neighbors: parallel edges collapse into one
/// neighbor entry, and adjacency is symmetric, so `b` is a neighbor of `a`
/// exactly when `a` is a neighbor of `b`.
///
/// Search algorithms such as coloring enumeration only need neighbor
/// access, and are written against this trait plus the concrete domain
/// information of the graph.
pub trait Undirected: ReadEdges {
    /// Iterator over the neighbors of one vertex.
    type Neighbors<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns the neighbors of `vertex` in ascending order.
    ///
    /// A vertex that is not part of the graph has no neighbors.
    fn neighbors(&self, vertex: Self::Vertex) -> Self::Neighbors<'_>;

    /// Returns the number of distinct neighbors of `vertex`.
    ///
    /// Unlike an edge count, duplicate edges contribute once.
    fn degree(&self, vertex: Self::Vertex) -> usize {
        self.neighbors(vertex).count()
    }

    /// Returns true when `a` and `b` are joined by at least one edge.
    fn is_adjacent(&self, a: Self::Vertex, b: Self::Vertex) -> bool {
        self.neighbors(a).any(|n| n == b)
    }
}
