//! Sprite Diff: structural change detection between document snapshots.
//!
//! This crate answers one question cheaply: given two versions of a layered,
//! animated, tile-capable sprite document, *which structural categories
//! differ*. It is built for dirty-checking and change classification (e.g.
//! suppressing an autosave when nothing changed), not for producing a patch.
//!
//! # Quick Start
//!
//! ```
//! use sprite_diff::{compare_docs, DiffConfig, Document, PixelFormat, Sprite};
//!
//! let a = Document::new(Sprite::new(32, 32, PixelFormat::Rgba));
//! let mut b = a.clone();
//! b.sprite.add_frame(120);
//!
//! let diff = compare_docs(&a, &b, &DiffConfig::default());
//! assert!(diff.anything);
//! assert!(diff.total_frames);
//! assert!(!diff.canvas);
//! ```
//!
//! The comparator is a pure function over two borrowed snapshots: no I/O, no
//! shared state, no failure modes. Two long-shipped quirks of the original
//! comparison logic are selectable through [`DiffConfig`]; see that type for
//! the compatible and strict presets.

mod cel;
mod color;
mod color_space;
mod compare;
mod config;
mod diff;
mod doc;
mod geom;
mod image;
mod layer;
mod palette;
mod sprite;
mod tag;
mod tileset;

pub use cel::Cel;
pub use color::Color;
pub use color_space::{ColorSpace, ColorSpaceKind};
pub use compare::compare_docs;
pub use config::{CelFieldRule, DiffConfig, PaletteRule};
pub use diff::{DiffCategory, DocDiff};
pub use doc::Document;
pub use geom::{Rect, Size};
pub use image::{is_same_image, Image, ImageError, PixelFormat};
pub use layer::{Layer, LayerContent, LayerFlags, LayerKind};
pub use palette::Palette;
pub use sprite::{Frame, Sprite, DEFAULT_FRAME_DURATION_MS};
pub use tag::{AniDir, Tag};
pub use tileset::{Tileset, TilesetError, Tilesets};
