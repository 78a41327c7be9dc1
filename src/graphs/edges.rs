/// Vertex and edge identifier types shared by the edge-related traits.
///
/// Types implementing graph traits are expected to use:
/// - [`Edges::Vertex`] to identify vertices, and
/// - [`Edges::Edge`] to identify edges.
pub trait Edges {
    /// Type used to identify vertices.
    ///
    /// Typically a small copyable value such as `usize`.
    type Vertex: Eq + Copy;

    /// Type used to identify edges.
    ///
    /// For an edge list this is the position of the edge in the list, so two
    /// entries joining the same pair of vertices stay distinguishable.
    type Edge: Eq + Copy;
}

/// A graph whose edges can be listed.
///
/// Edges are enumerated via [`ReadEdges::edges`] as triples
/// `(u, edge, v)`. For undirected graphs the order of `u` and `v` is the
/// order in which the edge was supplied and carries no direction.
pub trait ReadEdges: Edges {
    /// Iterator over all edges in the graph.
    type Edges<'a>: Iterator<Item = (Self::Vertex, Self::Edge, Self::Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    ///
    /// The order is stable for a given graph instance.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges, counting duplicates.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
