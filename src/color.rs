use std::fmt;

use bit_vec::BitVec;

use crate::error::{Error, Result};

/// A color, numbered from one up to the palette size.
pub type Color = usize;

/// Subset of the palette `{1, ..., k}`.
///
/// - Universe: the colors `1..=k`, fixed at construction
/// - Storage: bit `c - 1` is set iff color `c` is a member
///
/// Used for per-vertex domains and for the recolor neighbors of a color.
/// Sets over the same palette can be intersected without allocation
/// beyond the result.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(BitVec);

impl ColorSet {
    /// The empty subset of a palette with `color_count` colors.
    pub fn empty(color_count: usize) -> Self {
        Self(BitVec::from_elem(color_count, false))
    }

    /// The whole palette `1..=color_count`.
    pub fn full(color_count: usize) -> Self {
        Self(BitVec::from_elem(color_count, true))
    }

    /// Builds a subset from explicit colors, rejecting anything outside the palette.
    pub fn from_colors<I>(color_count: usize, colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut set = Self::empty(color_count);
        for color in colors {
            if !set.insert(color) && !set.in_palette(color) {
                return Err(Error::ColorOutOfRange { color, color_count });
            }
        }
        Ok(set)
    }

    /// Size of the palette this set lives in.
    pub fn color_count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn in_palette(&self, color: Color) -> bool {
        (1..=self.0.len()).contains(&color)
    }

    /// Adds `color`. Returns true when it was not already a member.
    ///
    /// Colors outside the palette are ignored and return false.
    pub fn insert(&mut self, color: Color) -> bool {
        if !self.in_palette(color) || self.0[color - 1] {
            return false;
        }
        self.0.set(color - 1, true);
        true
    }

    #[inline]
    pub fn contains(&self, color: Color) -> bool {
        self.in_palette(color) && self.0[color - 1]
    }

    /// Number of member colors.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&bit| bit).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.none()
    }

    /// Member colors in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, bit)| bit.then_some(index + 1))
    }

    /// Colors present in both sets.
    ///
    /// Sets over palettes of different sizes are intersected over the
    /// shorter palette.
    pub fn intersection(&self, other: &Self) -> Self {
        let len = self.0.len().min(other.0.len());
        let mut bits = BitVec::from_elem(len, false);
        for index in 0..len {
            if self.0[index] && other.0[index] {
                bits.set(index, true);
            }
        }
        Self(bits)
    }
}

impl fmt::Debug for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
