use std::fmt;
use std::ops::Index;

use crate::color::Color;
use crate::graphs::constraint::Vertex;
use crate::set::Set;

/// Deduplicated set of complete colorings.
pub type ColoringSet = Set<Coloring>;

/// One position of a partial coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Unassigned,
    Assigned(Color),
}

impl Slot {
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Slot::Assigned(color) => Some(color),
            Slot::Unassigned => None,
        }
    }

    #[inline]
    pub fn is_assigned(self) -> bool {
        matches!(self, Slot::Assigned(_))
    }
}

/// Coloring under construction during search.
///
/// Vertices are 1-indexed. Extending a partial coloring produces a new
/// value; the original is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialColoring {
    slots: Box<[Slot]>,
}

impl PartialColoring {
    /// All `vertex_count` vertices unassigned.
    pub fn unassigned(vertex_count: usize) -> Self {
        Self {
            slots: vec![Slot::Unassigned; vertex_count].into_boxed_slice(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot of `vertex`, or `None` outside `1..=vertex_count`.
    #[inline]
    pub fn slot(&self, vertex: Vertex) -> Option<Slot> {
        vertex
            .checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .copied()
    }

    /// Color of `vertex` when it has been assigned.
    #[inline]
    pub fn color(&self, vertex: Vertex) -> Option<Color> {
        self.slot(vertex).and_then(Slot::color)
    }

    /// Unassigned vertices in ascending order.
    pub fn unassigned_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_assigned())
            .map(|(index, _)| index + 1)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_assigned())
    }

    /// A copy of `self` with `vertex` bound to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside `1..=vertex_count`.
    pub fn assigned(&self, vertex: Vertex, color: Color) -> Self {
        let mut slots = self.slots.clone();
        slots[vertex - 1] = Slot::Assigned(color);
        Self { slots }
    }

    /// Converts to a complete coloring, or `None` while any vertex is unassigned.
    pub fn complete(&self) -> Option<Coloring> {
        self.slots
            .iter()
            .map(|slot| slot.color())
            .collect::<Option<Box<[Color]>>>()
            .map(|colors| Coloring { colors })
    }
}

/// A complete assignment of one color per vertex.
///
/// Vertices are 1-indexed: `coloring[1]` is the color of vertex one.
/// Equality, hashing and ordering use the full positional content.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coloring {
    colors: Box<[Color]>,
}

impl Coloring {
    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    /// Color of `vertex`, or `None` outside `1..=vertex_count`.
    #[inline]
    pub fn get(&self, vertex: Vertex) -> Option<Color> {
        vertex
            .checked_sub(1)
            .and_then(|index| self.colors.get(index))
            .copied()
    }

    /// Colors in vertex order, starting at vertex one.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Pairs `(vertex, color)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, &color)| (index + 1, color))
    }

    /// A copy of `self` with `vertex` recolored to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside `1..=vertex_count`.
    pub fn recolored(&self, vertex: Vertex, color: Color) -> Self {
        let mut colors = self.colors.clone();
        colors[vertex - 1] = color;
        Self { colors }
    }

    /// The single vertex where `self` and `other` disagree.
    ///
    /// Returns `None` when the colorings are equal, differ in more than one
    /// position, or have different lengths.
    pub fn single_difference(&self, other: &Self) -> Option<Vertex> {
        if self.colors.len() != other.colors.len() {
            return None;
        }

        let mut differing = self
            .colors
            .iter()
            .zip(other.colors.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| index + 1);

        match (differing.next(), differing.next()) {
            (Some(vertex), None) => Some(vertex),
            _ => None,
        }
    }
}

impl From<Vec<Color>> for Coloring {
    /// Colors listed in vertex order, starting at vertex one.
    fn from(colors: Vec<Color>) -> Self {
        Self {
            colors: colors.into_boxed_slice(),
        }
    }
}

impl Index<Vertex> for Coloring {
    type Output = Color;

    /// # Panics
    ///
    /// Panics if `vertex` is outside `1..=vertex_count`.
    fn index(&self, vertex: Vertex) -> &Color {
        &self.colors[vertex - 1]
    }
}

impl fmt::Debug for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.colors.iter()).finish()
    }
}
