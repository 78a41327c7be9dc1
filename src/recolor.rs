use crate::color::{Color, ColorSet};
use crate::error::{Error, Result};

/// Symmetric relation over the palette saying which single-vertex color
/// changes count as a move.
///
/// Stored as one neighbor [`ColorSet`] per color. A color that appears in no
/// pair has no neighbors, so a vertex holding it can never be recolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recolorability {
    /// Neighbors of color `c` live at index `c - 1`.
    neighbors: Box<[ColorSet]>,
}

impl Recolorability {
    /// Relation with no moves at all.
    pub fn empty(color_count: usize) -> Result<Self> {
        if color_count == 0 {
            return Err(Error::ZeroColors);
        }
        Ok(Self {
            neighbors: vec![ColorSet::empty(color_count); color_count].into_boxed_slice(),
        })
    }

    /// Builds the symmetric closure of `pairs`.
    ///
    /// Each pair is unordered. A pair `(c, c)` is accepted but never
    /// produces a move, since a move has to change the color.
    pub fn from_pairs<I>(color_count: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Color, Color)>,
    {
        let mut relation = Self::empty(color_count)?;
        for (a, b) in pairs {
            for color in [a, b] {
                if !(1..=color_count).contains(&color) {
                    return Err(Error::ColorOutOfRange { color, color_count });
                }
            }
            if a != b {
                relation.neighbors[a - 1].insert(b);
                relation.neighbors[b - 1].insert(a);
            }
        }
        Ok(relation)
    }

    /// Every color may be changed into every other color.
    pub fn complete(color_count: usize) -> Result<Self> {
        let pairs = (1..=color_count).flat_map(|a| (a + 1..=color_count).map(move |b| (a, b)));
        Self::from_pairs(color_count, pairs)
    }

    /// Colors form a cycle `1 - 2 - ... - k - 1`.
    ///
    /// With fewer than three colors this is the path `1 - 2` or nothing.
    pub fn cycle(color_count: usize) -> Result<Self> {
        let pairs = (1..=color_count).map(|a| (a, a % color_count + 1));
        Self::from_pairs(color_count, pairs)
    }

    pub fn color_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Colors reachable from `color` in one move, or `None` for a color
    /// outside the palette.
    pub fn neighbors(&self, color: Color) -> Option<&ColorSet> {
        color
            .checked_sub(1)
            .and_then(|index| self.neighbors.get(index))
    }

    /// Returns true when a vertex colored `a` may be recolored to `b`.
    pub fn allows(&self, a: Color, b: Color) -> bool {
        self.neighbors(a).is_some_and(|set| set.contains(b))
    }

    /// Unordered pairs `(a, b)` with `a < b`, ascending.
    pub fn pairs(&self) -> impl Iterator<Item = (Color, Color)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(index, set)| {
            let a = index + 1;
            set.iter().filter(move |&b| a < b).map(move |b| (a, b))
        })
    }
}
