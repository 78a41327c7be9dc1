//! Exhaustive enumeration of proper list colorings.
//!
//! The search is a plain backtracking search: branch on one unassigned
//! vertex, try each color of its domain in ascending order, and reject a
//! color as soon as an already colored neighbor holds it. There is no
//! propagation to unassigned neighbors.
//!
//! Backtracking state lives on an explicit stack of frames, so the depth of
//! the search is bounded by the heap rather than the call stack.

use std::vec;

use tracing::{debug, instrument, trace};

use crate::color::{Color, ColorSet};
use crate::coloring::{Coloring, ColoringSet, PartialColoring};
use crate::config::{SearchConfig, VertexOrder};
use crate::graphs::{
    constraint::{ConstraintGraph, Vertex},
    undirected::Undirected,
    vertices::Vertices,
};

/// One level of the search: a partial coloring, the vertex being branched
/// on, and the domain colors not tried yet.
struct Frame {
    partial: PartialColoring,
    vertex: Vertex,
    candidates: vec::IntoIter<Color>,
}

/// Lazy iterator over every proper coloring of a graph.
///
/// Each coloring is yielded exactly once: two search paths that reach a
/// complete coloring differ in the color of some branched vertex.
pub struct Colorings<'g> {
    graph: &'g ConstraintGraph,
    order: VertexOrder,
    stack: Vec<Frame>,

    /// Root that was already complete, which happens for graphs without vertices.
    pending: Option<Coloring>,
}

impl<'g> Colorings<'g> {
    pub fn new(graph: &'g ConstraintGraph, config: SearchConfig) -> Self {
        let mut search = Self {
            graph,
            order: config.order,
            stack: Vec::with_capacity(graph.vertex_count()),
            pending: None,
        };

        search.pending = search.descend(PartialColoring::unassigned(graph.vertex_count()));
        search
    }

    /// Opens a frame for the next vertex of `partial`, or returns `partial`
    /// as a solution once every vertex is colored.
    fn descend(&mut self, partial: PartialColoring) -> Option<Coloring> {
        let Some(vertex) = select_vertex(self.graph, &partial, self.order) else {
            return partial.complete();
        };

        let candidates: Vec<Color> = self
            .graph
            .domain(vertex)
            .map(|domain| domain.iter().collect())
            .unwrap_or_default();

        trace!(
            vertex,
            candidates = candidates.len(),
            depth = self.stack.len(),
            "branch"
        );

        self.stack.push(Frame {
            partial,
            vertex,
            candidates: candidates.into_iter(),
        });
        None
    }
}

impl Iterator for Colorings<'_> {
    type Item = Coloring;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(coloring) = self.pending.take() {
            return Some(coloring);
        }

        loop {
            let frame = self.stack.last_mut()?;

            let Some(color) = frame.candidates.next() else {
                self.stack.pop();
                continue;
            };

            if conflicts(self.graph, &frame.partial, frame.vertex, color) {
                continue;
            }

            let extended = frame.partial.assigned(frame.vertex, color);
            if let Some(coloring) = self.descend(extended) {
                return Some(coloring);
            }
        }
    }
}

/// Returns true when a colored neighbor of `vertex` already holds `color`.
#[inline]
fn conflicts(
    graph: &ConstraintGraph,
    partial: &PartialColoring,
    vertex: Vertex,
    color: Color,
) -> bool {
    graph
        .neighbors(vertex)
        .any(|neighbor| partial.color(neighbor) == Some(color))
}

/// Picks the vertex to branch on, or `None` when `partial` is complete.
fn select_vertex(
    graph: &ConstraintGraph,
    partial: &PartialColoring,
    order: VertexOrder,
) -> Option<Vertex> {
    let mut unassigned = partial.unassigned_vertices();
    match order {
        VertexOrder::LowestId => unassigned.next(),
        VertexOrder::SmallestDomain => unassigned
            .min_by_key(|&vertex| (graph.domain(vertex).map_or(0, ColorSet::len), vertex)),
    }
}

/// Collects every proper, domain respecting coloring of `graph`.
///
/// An uncolorable graph yields the empty set. A graph without vertices has
/// exactly one coloring, the empty one.
#[instrument(skip_all, fields(
    vertices = graph.vertex_count(),
    colors = graph.color_count(),
    order = ?config.order
))]
pub fn enumerate(graph: &ConstraintGraph, config: SearchConfig) -> ColoringSet {
    let colorings: ColoringSet = Colorings::new(graph, config).collect();
    debug!(count = colorings.len(), "enumerated colorings");
    colorings
}
