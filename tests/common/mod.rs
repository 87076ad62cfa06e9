//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use sprite_diff::{
    Cel, Color, ColorSpace, Document, Image, Layer, Palette, PixelFormat, Rect, Size, Sprite, Tag,
    Tileset, Tilesets,
};

/// A small image whose pixels are derived from `seed`, so distinct seeds
/// produce distinct content.
pub fn seeded_image(w: u32, h: u32, seed: u8) -> Image {
    let mut img = Image::blank(PixelFormat::Rgba, w, h);
    for (i, byte) in img.pixels_mut().iter_mut().enumerate() {
        *byte = seed.wrapping_add(i as u8);
    }
    img
}

pub fn cel_with_image(frame: u32, x: i32, y: i32, seed: u8) -> Cel {
    Cel::with_image(frame, Rect::new(x, y, 8, 8), 255, seeded_image(8, 8, seed))
}

pub fn tileset_with_tiles(tile: u32, count: u8) -> Tileset {
    let mut ts = Tileset::empty(Size::new(tile, tile));
    for i in 0..count {
        let mut img = Image::blank(PixelFormat::Rgba, tile, tile);
        img.pixels_mut()[0] = i;
        ts.push(img).expect("tile matches tile size");
    }
    ts
}

/// A representative document: 3 frames, two layers with cels, a tag, a
/// palette, and a two-tile tileset referenced by a tilemap layer.
pub fn base_doc() -> Document {
    let mut sprite = Sprite::new(32, 32, PixelFormat::Rgba);
    sprite.add_frame(120);
    sprite.add_frame(80);

    sprite.tags.push(Tag::new("walk", 0, 2));
    sprite
        .palettes
        .push(Palette::new(vec![Color::BLACK, Color::WHITE, Color::rgb(200, 40, 40)]));
    sprite.tilesets = Some(Tilesets::new(vec![tileset_with_tiles(8, 2)]));
    sprite.color_space = ColorSpace::srgb();

    let mut background = Layer::image("background", 255);
    for frame in 0..3 {
        background.set_cel(cel_with_image(frame, 0, 0, frame as u8));
    }
    sprite.add_layer(background);

    let mut terrain = Layer::tilemap("terrain", 0);
    terrain.set_cel(cel_with_image(0, 4, 4, 100));
    sprite.add_layer(terrain);

    Document::new(sprite)
}
