//! Layers: named visual planes with flags, type-specific data, and cels.

use crate::cel::Cel;
use bitflags::bitflags;
use std::collections::BTreeMap;

bitflags! {
    /// Per-layer flag bits.
    ///
    /// The low 16 bits are saved with the document; the high bits are
    /// session-only editor state. [`LayerFlags::PERSISTENT`] masks off the
    /// session bits so that comparisons see only what the file would see.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct LayerFlags: u32 {
        const VISIBLE = 0x0001;
        const EDITABLE = 0x0002;
        const LOCK_MOVE = 0x0004;
        const BACKGROUND = 0x0008;
        const CONTINUOUS = 0x0010;
        const COLLAPSED = 0x0020;
        const REFERENCE = 0x0040;

        // Session-only bits, never saved.
        const SELECTED = 0x0001_0000;
        const EXPANDED = 0x0002_0000;

        const PERSISTENT = 0xffff;
    }
}

/// The layer variants, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Group,
    Image,
    Tilemap,
}

/// Type-specific layer data.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    /// A group of child layers; groups carry no cels of their own.
    Group { children: Vec<Layer> },
    Image { opacity: u8 },
    /// References tiles from the sprite's tileset collection.
    Tilemap { tileset_index: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub flags: LayerFlags,
    pub content: LayerContent,
    cels: BTreeMap<u32, Cel>,
}

impl Layer {
    pub fn image(name: impl Into<String>, opacity: u8) -> Layer {
        Layer {
            name: name.into(),
            flags: LayerFlags::VISIBLE | LayerFlags::EDITABLE,
            content: LayerContent::Image { opacity },
            cels: BTreeMap::new(),
        }
    }

    pub fn tilemap(name: impl Into<String>, tileset_index: u32) -> Layer {
        Layer {
            name: name.into(),
            flags: LayerFlags::VISIBLE | LayerFlags::EDITABLE,
            content: LayerContent::Tilemap { tileset_index },
            cels: BTreeMap::new(),
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<Layer>) -> Layer {
        Layer {
            name: name.into(),
            flags: LayerFlags::VISIBLE | LayerFlags::EDITABLE,
            content: LayerContent::Group { children },
            cels: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> LayerKind {
        match self.content {
            LayerContent::Group { .. } => LayerKind::Group,
            LayerContent::Image { .. } => LayerKind::Image,
            LayerContent::Tilemap { .. } => LayerKind::Tilemap,
        }
    }

    /// Flags with the session-only bits masked off.
    pub fn persistent_flags(&self) -> LayerFlags {
        self.flags & LayerFlags::PERSISTENT
    }

    /// Opacity for image layers, `None` for other kinds.
    pub fn opacity(&self) -> Option<u8> {
        match self.content {
            LayerContent::Image { opacity } => Some(opacity),
            _ => None,
        }
    }

    /// Tileset index for tilemap layers, `None` for other kinds.
    pub fn tileset_index(&self) -> Option<u32> {
        match self.content {
            LayerContent::Tilemap { tileset_index } => Some(tileset_index),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Layer] {
        match &self.content {
            LayerContent::Group { children } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Layer>> {
        match &mut self.content {
            LayerContent::Group { children } => Some(children),
            _ => None,
        }
    }

    /// The cel at the given frame, if any.
    pub fn cel(&self, frame: u32) -> Option<&Cel> {
        self.cels.get(&frame)
    }

    /// Inserts a cel at its own frame index, replacing any existing cel there.
    pub fn set_cel(&mut self, cel: Cel) {
        self.cels.insert(cel.frame, cel);
    }

    pub fn remove_cel(&mut self, frame: u32) -> Option<Cel> {
        self.cels.remove(&frame)
    }

    pub fn cels(&self) -> impl Iterator<Item = &Cel> {
        self.cels.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;

    #[test]
    fn persistent_flags_drop_session_bits() {
        let mut layer = Layer::image("bg", 255);
        layer.flags |= LayerFlags::SELECTED | LayerFlags::EXPANDED;
        assert_eq!(
            layer.persistent_flags(),
            LayerFlags::VISIBLE | LayerFlags::EDITABLE
        );
    }

    #[test]
    fn set_cel_replaces_existing_frame() {
        let mut layer = Layer::image("fg", 128);
        layer.set_cel(Cel::new(2, Rect::new(0, 0, 4, 4), 255));
        layer.set_cel(Cel::new(2, Rect::new(1, 1, 4, 4), 255));
        assert_eq!(layer.cels().count(), 1);
        assert_eq!(layer.cel(2).map(|c| c.bounds.x), Some(1));
    }

    #[test]
    fn variant_accessors_are_kind_specific() {
        let img = Layer::image("a", 200);
        let map = Layer::tilemap("b", 3);
        assert_eq!(img.opacity(), Some(200));
        assert_eq!(img.tileset_index(), None);
        assert_eq!(map.tileset_index(), Some(3));
        assert_eq!(map.opacity(), None);
    }
}
