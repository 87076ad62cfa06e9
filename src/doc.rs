//! Document wrapper around a sprite.

use crate::sprite::Sprite;
use std::path::PathBuf;

/// A document snapshot: one sprite plus where it lives on disk.
///
/// The filename never participates in comparisons; saving the same document
/// under a new name is not a structural change.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: Option<PathBuf>,
    pub sprite: Sprite,
}

impl Document {
    pub fn new(sprite: Sprite) -> Document {
        Document {
            filename: None,
            sprite,
        }
    }

    pub fn with_filename(sprite: Sprite, filename: impl Into<PathBuf>) -> Document {
        Document {
            filename: Some(filename.into()),
            sprite,
        }
    }
}
