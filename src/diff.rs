//! The comparison result: one boolean per structural category.

use serde::{Deserialize, Serialize};

/// The structural categories a comparison can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffCategory {
    Canvas,
    TotalFrames,
    FrameDuration,
    Tags,
    Palettes,
    Tilesets,
    Layers,
    Cels,
    Images,
    ColorProfiles,
    GridBounds,
}

impl DiffCategory {
    pub const ALL: [DiffCategory; 11] = [
        DiffCategory::Canvas,
        DiffCategory::TotalFrames,
        DiffCategory::FrameDuration,
        DiffCategory::Tags,
        DiffCategory::Palettes,
        DiffCategory::Tilesets,
        DiffCategory::Layers,
        DiffCategory::Cels,
        DiffCategory::Images,
        DiffCategory::ColorProfiles,
        DiffCategory::GridBounds,
    ];
}

/// Per-category change flags produced by [`compare_docs`](crate::compare_docs).
///
/// `anything` is maintained at every flag-set site rather than recomputed, so
/// a returned value always satisfies
/// `anything == (canvas || total_frames || ... || grid_bounds)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocDiff {
    /// True iff any category flag below is true.
    pub anything: bool,
    pub canvas: bool,
    pub total_frames: bool,
    pub frame_duration: bool,
    pub tags: bool,
    pub palettes: bool,
    pub tilesets: bool,
    pub layers: bool,
    pub cels: bool,
    pub images: bool,
    pub color_profiles: bool,
    pub grid_bounds: bool,
}

impl DocDiff {
    /// Sets one category flag together with the aggregate flag.
    pub fn mark(&mut self, category: DiffCategory) {
        self.anything = true;
        match category {
            DiffCategory::Canvas => self.canvas = true,
            DiffCategory::TotalFrames => self.total_frames = true,
            DiffCategory::FrameDuration => self.frame_duration = true,
            DiffCategory::Tags => self.tags = true,
            DiffCategory::Palettes => self.palettes = true,
            DiffCategory::Tilesets => self.tilesets = true,
            DiffCategory::Layers => self.layers = true,
            DiffCategory::Cels => self.cels = true,
            DiffCategory::Images => self.images = true,
            DiffCategory::ColorProfiles => self.color_profiles = true,
            DiffCategory::GridBounds => self.grid_bounds = true,
        }
    }

    pub fn flag(&self, category: DiffCategory) -> bool {
        match category {
            DiffCategory::Canvas => self.canvas,
            DiffCategory::TotalFrames => self.total_frames,
            DiffCategory::FrameDuration => self.frame_duration,
            DiffCategory::Tags => self.tags,
            DiffCategory::Palettes => self.palettes,
            DiffCategory::Tilesets => self.tilesets,
            DiffCategory::Layers => self.layers,
            DiffCategory::Cels => self.cels,
            DiffCategory::Images => self.images,
            DiffCategory::ColorProfiles => self.color_profiles,
            DiffCategory::GridBounds => self.grid_bounds,
        }
    }

    /// Whether `anything` agrees with the OR of the category flags.
    pub fn is_consistent(&self) -> bool {
        self.anything == DiffCategory::ALL.iter().any(|&c| self.flag(c))
    }
}
