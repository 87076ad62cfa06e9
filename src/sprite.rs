//! The sprite: canvas, frames, tags, palettes, tilesets, and the layer tree.

use crate::color_space::ColorSpace;
use crate::geom::Rect;
use crate::image::PixelFormat;
use crate::layer::Layer;
use crate::palette::Palette;
use crate::tag::Tag;
use crate::tileset::Tilesets;

/// Default frame duration in milliseconds for newly added frames.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// One animation frame. Pixel content lives in the layers' cels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub duration_ms: u32,
}

/// The document's top-level canvas plus everything hanging off it.
///
/// # Invariants
///
/// A sprite always has at least one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
    frames: Vec<Frame>,
    pub tags: Vec<Tag>,
    pub palettes: Vec<Palette>,
    pub tilesets: Option<Tilesets>,
    layers: Vec<Layer>,
    pub color_space: ColorSpace,
    pub grid_bounds: Rect,
}

impl Sprite {
    pub fn new(width: u32, height: u32, pixel_format: PixelFormat) -> Sprite {
        Sprite {
            width,
            height,
            pixel_format,
            frames: vec![Frame {
                duration_ms: DEFAULT_FRAME_DURATION_MS,
            }],
            tags: Vec::new(),
            palettes: Vec::new(),
            tilesets: None,
            layers: Vec::new(),
            color_space: ColorSpace::default(),
            grid_bounds: Rect::new(0, 0, 16, 16),
        }
    }

    pub fn total_frames(&self) -> u32 {
        self.frames.len() as u32
    }

    /// Duration of the given frame, or 0 when the index is out of range.
    pub fn frame_duration(&self, frame: u32) -> u32 {
        self.frames
            .get(frame as usize)
            .map_or(0, |f| f.duration_ms)
    }

    pub fn add_frame(&mut self, duration_ms: u32) {
        self.frames.push(Frame { duration_ms });
    }

    pub fn set_frame_duration(&mut self, frame: u32, duration_ms: u32) {
        if let Some(f) = self.frames.get_mut(frame as usize) {
            f.duration_ms = duration_ms;
        }
    }

    /// Top-level layers in stacking order; groups nest their children.
    pub fn root_layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn root_layers_mut(&mut self) -> &mut Vec<Layer> {
        &mut self.layers
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// All layers flattened depth-first: each group precedes its children.
    pub fn all_layers(&self) -> Vec<&Layer> {
        let mut out = Vec::new();
        fn walk<'a>(layers: &'a [Layer], out: &mut Vec<&'a Layer>) {
            for layer in layers {
                out.push(layer);
                walk(layer.children(), out);
            }
        }
        walk(&self.layers, &mut out);
        out
    }

    pub fn all_layers_count(&self) -> usize {
        fn count(layers: &[Layer]) -> usize {
            layers.iter().map(|l| 1 + count(l.children())).sum()
        }
        count(&self.layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sprite_has_one_frame() {
        let sprite = Sprite::new(32, 32, PixelFormat::Rgba);
        assert_eq!(sprite.total_frames(), 1);
        assert_eq!(sprite.frame_duration(0), DEFAULT_FRAME_DURATION_MS);
        assert_eq!(sprite.frame_duration(1), 0);
    }

    #[test]
    fn all_layers_flattens_groups_depth_first() {
        let mut sprite = Sprite::new(16, 16, PixelFormat::Indexed);
        sprite.add_layer(Layer::image("bg", 255));
        sprite.add_layer(Layer::group(
            "fx",
            vec![Layer::image("glow", 128), Layer::image("shadow", 64)],
        ));

        let names: Vec<&str> = sprite.all_layers().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["bg", "fx", "glow", "shadow"]);
        assert_eq!(sprite.all_layers_count(), 4);
    }
}
