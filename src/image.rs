//! Raster image buffers and the exact-equality predicate used by the diff.

use crate::geom::Rect;
use thiserror::Error;

/// Pixel storage format of an image and of the document canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit RGBA, 4 bytes per pixel.
    Rgba,
    /// 8-bit value plus 8-bit alpha, 2 bytes per pixel.
    Grayscale,
    /// 8-bit palette index, 1 byte per pixel.
    Indexed,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba => 4,
            PixelFormat::Grayscale => 2,
            PixelFormat::Indexed => 1,
        }
    }
}

/// Errors produced when constructing an [`Image`].
#[derive(Debug, Error)]
pub enum ImageError {
    #[error(
        "pixel buffer holds {actual} bytes but a {width}x{height} {format:?} image needs {expected}"
    )]
    BufferSizeMismatch {
        format: PixelFormat,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// An owned raster image.
///
/// # Invariants
///
/// `pixels.len() == width * height * format.bytes_per_pixel()`, enforced at
/// construction. Rows are stored top to bottom with no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    format: PixelFormat,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    pub fn new(
        format: PixelFormat,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Image, ImageError> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(ImageError::BufferSizeMismatch {
                format,
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Image {
            format,
            width,
            height,
            pixels,
        })
    }

    /// A zero-filled image of the given dimensions.
    pub fn blank(format: PixelFormat, width: u32, height: u32) -> Image {
        let len = width as usize * height as usize * format.bytes_per_pixel();
        Image {
            format,
            width,
            height,
            pixels: vec![0; len],
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

/// Exact pixel equality: same format, same dimensions, same bytes.
pub fn is_same_image(a: &Image, b: &Image) -> bool {
    a.format == b.format && a.width == b.width && a.height == b.height && a.pixels == b.pixels
}
