/// A graph whose vertex set can be listed.
pub trait Vertices {
    type Vertex;

    /// Iterator over the vertex set, in a stable order.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_>;

    /// Size of the vertex set.
    ///
    /// Implementations backed by a contiguous numbering should override
    /// this instead of counting.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}
