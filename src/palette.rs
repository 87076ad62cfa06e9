//! Ordered color palettes and their content-difference predicate.

use crate::color::Color;

/// An ordered list of colors attached to the sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Palette {
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn set_color(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }

    /// Number of entries that differ between the two palettes.
    ///
    /// Entries present in only one palette (when the lengths differ) each
    /// count as one difference.
    pub fn count_diff(&self, other: &Palette) -> usize {
        let shared = self.colors.len().min(other.colors.len());
        let changed = self.colors[..shared]
            .iter()
            .zip(&other.colors[..shared])
            .filter(|(a, b)| a != b)
            .count();
        let extra = self.colors.len().max(other.colors.len()) - shared;
        changed + extra
    }
}
