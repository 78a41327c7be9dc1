use std::collections::BTreeSet;
use std::iter::{Copied, Enumerate};
use std::ops::Range;
use std::slice;

use crate::color::{Color, ColorSet};
use crate::coloring::{Coloring, ColoringSet};
use crate::config::SearchConfig;
use crate::enumerate::{enumerate, Colorings};
use crate::error::{Error, Result};
use crate::graphs::{
    edges::{Edges, ReadEdges},
    undirected::Undirected,
    vertices::Vertices,
};

/// A vertex, numbered from one up to the vertex count.
pub type Vertex = usize;

/// Undirected graph together with the colors each vertex may take.
///
/// Vertices are `1..=vertex_count` and colors are `1..=color_count`.
/// Adjacency is stored as a sorted, duplicate free neighbor list per
/// vertex and is symmetric by construction. The raw edge list is kept as
/// supplied, duplicates included, for consumers that draw the graph.
///
/// The model is immutable once built.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    color_count: usize,

    /// Neighbors of vertex `v` live at index `v - 1`.
    adjacency: Box<[Box<[Vertex]>]>,

    /// Allowed colors of vertex `v` live at index `v - 1`.
    domains: Box<[ColorSet]>,

    edge_list: Box<[(Vertex, Vertex)]>,
}

impl ConstraintGraph {
    /// Builds a graph where every vertex may take every color.
    pub fn new<E>(vertex_count: usize, edges: E, color_count: usize) -> Result<Self>
    where
        E: IntoIterator<Item = (Vertex, Vertex)>,
    {
        Self::with_domains(
            vertex_count,
            edges,
            color_count,
            std::iter::empty::<(Vertex, Vec<Color>)>(),
        )
    }

    /// Builds a graph with per-vertex domain overrides.
    ///
    /// Vertices missing from `domains` keep the full palette. A vertex listed
    /// more than once takes the last listing. An empty listing is allowed and
    /// makes the graph uncolorable.
    pub fn with_domains<E, D, C>(
        vertex_count: usize,
        edges: E,
        color_count: usize,
        domains: D,
    ) -> Result<Self>
    where
        E: IntoIterator<Item = (Vertex, Vertex)>,
        D: IntoIterator<Item = (Vertex, C)>,
        C: IntoIterator<Item = Color>,
    {
        if color_count == 0 {
            return Err(Error::ZeroColors);
        }

        let check_vertex = |vertex: Vertex| {
            if (1..=vertex_count).contains(&vertex) {
                Ok(vertex)
            } else {
                Err(Error::VertexOutOfRange {
                    vertex,
                    vertex_count,
                })
            }
        };

        let mut neighbors = vec![BTreeSet::new(); vertex_count];
        let mut edge_list = Vec::new();
        for (u, v) in edges {
            let (u, v) = (check_vertex(u)?, check_vertex(v)?);
            neighbors[u - 1].insert(v);
            neighbors[v - 1].insert(u);
            edge_list.push((u, v));
        }

        let mut domains_by_vertex = vec![ColorSet::full(color_count); vertex_count];
        for (vertex, colors) in domains {
            let vertex = check_vertex(vertex)?;
            domains_by_vertex[vertex - 1] = ColorSet::from_colors(color_count, colors)?;
        }

        Ok(Self {
            color_count,
            adjacency: neighbors
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
            domains: domains_by_vertex.into_boxed_slice(),
            edge_list: edge_list.into_boxed_slice(),
        })
    }

    /// Number of colors `k` in the palette.
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Allowed colors of `vertex`, or `None` outside `1..=vertex_count`.
    pub fn domain(&self, vertex: Vertex) -> Option<&ColorSet> {
        vertex
            .checked_sub(1)
            .and_then(|index| self.domains.get(index))
    }

    /// Edges as supplied at construction, duplicates included.
    pub fn edge_list(&self) -> &[(Vertex, Vertex)] {
        &self.edge_list
    }

    #[inline]
    fn neighbor_slice(&self, vertex: Vertex) -> &[Vertex] {
        vertex
            .checked_sub(1)
            .and_then(|index| self.adjacency.get(index))
            .map(|neighbors| &neighbors[..])
            .unwrap_or(&[])
    }

    /// Returns true when `coloring` is a complete, domain respecting, proper
    /// coloring of this graph.
    pub fn is_proper(&self, coloring: &Coloring) -> bool {
        coloring.vertex_count() == self.vertex_count()
            && coloring.iter().all(|(vertex, color)| {
                self.domains[vertex - 1].contains(color)
                    && self
                        .neighbor_slice(vertex)
                        .iter()
                        .all(|&neighbor| neighbor == vertex || coloring[neighbor] != color)
            })
    }

    /// All proper colorings under the default search configuration.
    pub fn colorings(&self) -> ColoringSet {
        enumerate(self, SearchConfig::default())
    }

    /// Lazily yields every proper coloring exactly once.
    pub fn iter_colorings(&self, config: SearchConfig) -> Colorings<'_> {
        Colorings::new(self, config)
    }
}

/// Iterator over the edge list as `(u, position, v)` triples.
pub struct EdgeList<'a> {
    inner: Enumerate<slice::Iter<'a, (Vertex, Vertex)>>,
}

impl Iterator for EdgeList<'_> {
    type Item = (Vertex, usize, Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(position, &(u, v))| (u, position, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl Vertices for ConstraintGraph {
    type Vertex = Vertex;

    type Vertices<'a>
        = Range<Vertex>
    where
        Self: 'a;

    /// Vertices are the integers from one up to `vertex_count`.
    fn vertices(&self) -> Self::Vertices<'_> {
        1..self.domains.len() + 1
    }

    fn vertex_count(&self) -> usize {
        self.domains.len()
    }
}

impl Edges for ConstraintGraph {
    type Vertex = Vertex;

    /// Position in the supplied edge list.
    type Edge = usize;
}

impl ReadEdges for ConstraintGraph {
    type Edges<'a>
        = EdgeList<'a>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        EdgeList {
            inner: self.edge_list.iter().enumerate(),
        }
    }

    fn edge_count(&self) -> usize {
        self.edge_list.len()
    }
}

impl Undirected for ConstraintGraph {
    type Neighbors<'a>
        = Copied<slice::Iter<'a, Vertex>>
    where
        Self: 'a;

    fn neighbors(&self, vertex: Vertex) -> Self::Neighbors<'_> {
        self.neighbor_slice(vertex).iter().copied()
    }

    fn degree(&self, vertex: Vertex) -> usize {
        self.neighbor_slice(vertex).len()
    }

    fn is_adjacent(&self, a: Vertex, b: Vertex) -> bool {
        self.neighbor_slice(a).binary_search(&b).is_ok()
    }
}
