//! Tilesets: indexed collections of fixed-size reusable tile images.

use crate::geom::Size;
use crate::image::Image;
use thiserror::Error;

/// Errors produced when constructing a [`Tileset`].
#[derive(Debug, Error)]
pub enum TilesetError {
    #[error("tile {index} is {actual_w}x{actual_h} but the tileset tile size is {tile_w}x{tile_h}")]
    TileSizeMismatch {
        index: usize,
        tile_w: u32,
        tile_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// A sequence of tile images sharing one tile size.
///
/// # Invariants
///
/// Every tile's dimensions equal `tile_size`, enforced at construction and
/// on [`Tileset::push`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tileset {
    tile_size: Size,
    tiles: Vec<Image>,
}

impl Tileset {
    pub fn new(tile_size: Size, tiles: Vec<Image>) -> Result<Tileset, TilesetError> {
        for (index, tile) in tiles.iter().enumerate() {
            if tile.width() != tile_size.w || tile.height() != tile_size.h {
                return Err(TilesetError::TileSizeMismatch {
                    index,
                    tile_w: tile_size.w,
                    tile_h: tile_size.h,
                    actual_w: tile.width(),
                    actual_h: tile.height(),
                });
            }
        }
        Ok(Tileset { tile_size, tiles })
    }

    pub fn empty(tile_size: Size) -> Tileset {
        Tileset {
            tile_size,
            tiles: Vec::new(),
        }
    }

    pub fn push(&mut self, tile: Image) -> Result<(), TilesetError> {
        if tile.width() != self.tile_size.w || tile.height() != self.tile_size.h {
            return Err(TilesetError::TileSizeMismatch {
                index: self.tiles.len(),
                tile_w: self.tile_size.w,
                tile_h: self.tile_size.h,
                actual_w: tile.width(),
                actual_h: tile.height(),
            });
        }
        self.tiles.push(tile);
        Ok(())
    }

    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, index: usize) -> Option<&Image> {
        self.tiles.get(index)
    }

    pub fn tiles(&self) -> &[Image] {
        &self.tiles
    }

    pub fn tile_mut(&mut self, index: usize) -> Option<&mut Image> {
        self.tiles.get_mut(index)
    }
}

/// The sprite's indexed tileset collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tilesets {
    tilesets: Vec<Tileset>,
}

impl Tilesets {
    pub fn new(tilesets: Vec<Tileset>) -> Tilesets {
        Tilesets { tilesets }
    }

    pub fn len(&self) -> usize {
        self.tilesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tilesets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tileset> {
        self.tilesets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tileset> {
        self.tilesets.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tileset> {
        self.tilesets.iter()
    }
}

impl From<Vec<Tileset>> for Tilesets {
    fn from(tilesets: Vec<Tileset>) -> Tilesets {
        Tilesets { tilesets }
    }
}
