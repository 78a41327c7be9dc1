//! Error types for graph construction and solution-space building.
//!
//! Unsatisfiable inputs are not errors: an uncolorable graph simply has an
//! empty coloring set. Errors are reserved for references that point outside
//! the declared vertex or color ranges.

use thiserror::Error;

use crate::color::Color;
use crate::graphs::constraint::Vertex;

/// Errors reported by the fallible constructors of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A palette needs at least one color.
    #[error("color count must be positive")]
    ZeroColors,

    /// An edge endpoint or domain key is not in `1..=vertex_count`.
    #[error("vertex {vertex} is out of range 1..={vertex_count}")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    /// A domain color or relation color is not in `1..=color_count`.
    #[error("color {color} is out of range 1..={color_count}")]
    ColorOutOfRange { color: Color, color_count: usize },

    /// The recolorability relation was built for a different palette.
    #[error("relation has {relation} colors but the graph has {graph}")]
    ColorCountMismatch { graph: usize, relation: usize },

    /// A supplied coloring does not assign exactly one color per vertex.
    #[error("coloring has length {found}, expected {expected}")]
    ColoringLengthMismatch { expected: usize, found: usize },

    /// Edge probability for a random graph must lie in `[0, 1]`.
    #[error("edge probability {0} is not in [0, 1]")]
    InvalidProbability(f64),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
