//! Cels: the per-(layer, frame) placement of image content.

use crate::geom::Rect;
use crate::image::Image;

/// Content placed on one layer at one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cel {
    /// Frame index this cel is attached to.
    pub frame: u32,
    /// Placement of the content on the canvas.
    pub bounds: Rect,
    pub opacity: u8,
    /// Linked or empty cels carry no image of their own.
    pub image: Option<Image>,
}

impl Cel {
    pub fn new(frame: u32, bounds: Rect, opacity: u8) -> Cel {
        Cel {
            frame,
            bounds,
            opacity,
            image: None,
        }
    }

    pub fn with_image(frame: u32, bounds: Rect, opacity: u8, image: Image) -> Cel {
        Cel {
            frame,
            bounds,
            opacity,
            image: Some(image),
        }
    }
}
