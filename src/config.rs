//! Tuning knobs for enumeration and solution-space construction.
//!
//! Neither knob changes *which* colorings or components are produced. The
//! vertex order only changes how the search tree is shaped, and the edge
//! mode only changes how many moves are recorded inside a component.

/// Which unassigned vertex the enumerator branches on next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexOrder {
    /// The unassigned vertex with the smallest id.
    #[default]
    LowestId,

    /// The unassigned vertex with the fewest domain colors, ties broken by id.
    ///
    /// Uncolorable vertices (empty domains) are found first, which cuts the
    /// search short.
    SmallestDomain,
}

/// Configuration for [`crate::enumerate::enumerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub order: VertexOrder,
}

impl SearchConfig {
    pub fn with_order(order: VertexOrder) -> Self {
        Self { order }
    }
}

/// Which moves a component records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Every legal move between two colorings of the component.
    #[default]
    Complete,

    /// Only the move that first reached each coloring, forming a spanning
    /// tree of the component rooted at its seed.
    Traversal,
}

/// Configuration for [`crate::space::SolutionSpace::build_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpaceConfig {
    pub edges: EdgeMode,
}

impl SpaceConfig {
    pub fn with_edges(edges: EdgeMode) -> Self {
        Self { edges }
    }
}
