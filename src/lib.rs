//! List colorings of small graphs and the recoloring moves between them.
//!
//! A [`ConstraintGraph`] holds a graph on vertices `1..=n` together with the
//! colors `1..=k` each vertex may take. [`ConstraintGraph::colorings`]
//! enumerates every proper coloring, and [`SolutionSpace::build`] groups
//! those colorings into components connected by single-vertex recolor moves
//! that a [`Recolorability`] relation permits.
//!
//! ```
//! use recolor::{ConstraintGraph, Recolorability, SolutionSpace};
//!
//! let graph = ConstraintGraph::new(3, [(1, 2), (2, 3)], 3)?;
//! let colorings = graph.colorings();
//! assert_eq!(colorings.len(), 12);
//!
//! let relation = Recolorability::cycle(3)?;
//! let space = SolutionSpace::build(&graph, &colorings, &relation)?;
//! assert!(space.is_connected());
//! # Ok::<(), recolor::Error>(())
//! ```

pub mod color;
pub mod coloring;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod generators;
pub mod graphs;
pub mod recolor;
pub mod set;
pub mod space;

pub use color::{Color, ColorSet};
pub use coloring::{Coloring, ColoringSet, PartialColoring, Slot};
pub use config::{EdgeMode, SearchConfig, SpaceConfig, VertexOrder};
pub use enumerate::{enumerate, Colorings};
pub use error::{Error, Result};
pub use graphs::constraint::{ConstraintGraph, Vertex};
pub use recolor::Recolorability;
pub use space::{Component, Move, SolutionSpace};
