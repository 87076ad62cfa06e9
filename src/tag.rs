//! Animation tags: named frame ranges with playback settings.

use crate::color::Color;

/// Playback direction of a tagged frame range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AniDir {
    Forward,
    Reverse,
    PingPong,
    PingPongReverse,
}

/// A named range of frames used to mark an animation segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub from_frame: u32,
    pub to_frame: u32,
    pub name: String,
    pub color: Color,
    pub ani_dir: AniDir,
    /// Number of times the segment plays; 0 means repeat forever.
    pub repeat: u16,
}

impl Tag {
    pub fn new(name: impl Into<String>, from_frame: u32, to_frame: u32) -> Tag {
        Tag {
            from_frame,
            to_frame,
            name: name.into(),
            color: Color::BLACK,
            ani_dir: AniDir::Forward,
            repeat: 0,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.to_frame.saturating_sub(self.from_frame) + 1
    }
}
