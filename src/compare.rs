//! Single-pass structural comparison of two document snapshots.
//!
//! [`compare_docs`] answers "which structural categories differ" without
//! producing a patch. Every category check runs; a flag set by an earlier
//! check never suppresses a later one. The only short-circuits are internal
//! to a category and exist to stop redundant work once that category's flag
//! is already decided.

use crate::cel::Cel;
use crate::config::{CelFieldRule, DiffConfig, PaletteRule};
use crate::diff::{DiffCategory, DocDiff};
use crate::doc::Document;
use crate::image::is_same_image;
use crate::layer::{Layer, LayerContent};
use crate::sprite::Sprite;
use crate::tileset::Tilesets;

/// Compares two document snapshots category by category.
///
/// Total and side-effect-free: it borrows both documents read-only and owns
/// nothing but the returned [`DocDiff`]. Filenames are never compared.
pub fn compare_docs(a: &Document, b: &Document, config: &DiffConfig) -> DocDiff {
    let mut diff = DocDiff::default();
    let (sa, sb) = (&a.sprite, &b.sprite);

    compare_canvas(sa, sb, &mut diff);
    compare_frames(sa, sb, &mut diff);
    compare_tags(sa, sb, &mut diff);
    compare_palettes(sa, sb, config, &mut diff);
    compare_tilesets(sa, sb, &mut diff);
    compare_layers(sa, sb, config, &mut diff);
    compare_color_profiles(sa, sb, &mut diff);
    compare_grid_bounds(sa, sb, &mut diff);

    diff
}

fn compare_canvas(a: &Sprite, b: &Sprite, diff: &mut DocDiff) {
    if a.width != b.width || a.height != b.height || a.pixel_format != b.pixel_format {
        diff.mark(DiffCategory::Canvas);
    }
}

fn compare_frames(a: &Sprite, b: &Sprite, diff: &mut DocDiff) {
    if a.total_frames() != b.total_frames() {
        // Durations are meaningless to pair up across mismatched counts.
        diff.mark(DiffCategory::TotalFrames);
        return;
    }
    for frame in 0..a.total_frames() {
        if a.frame_duration(frame) != b.frame_duration(frame) {
            diff.mark(DiffCategory::FrameDuration);
            break;
        }
    }
}

fn compare_tags(a: &Sprite, b: &Sprite, diff: &mut DocDiff) {
    if a.tags.len() != b.tags.len() {
        diff.mark(DiffCategory::Tags);
        return;
    }
    // Full lockstep walk; no early exit once a mismatch is found.
    for (ta, tb) in a.tags.iter().zip(&b.tags) {
        if ta.from_frame != tb.from_frame
            || ta.to_frame != tb.to_frame
            || ta.name != tb.name
            || ta.color != tb.color
            || ta.ani_dir != tb.ani_dir
            || ta.repeat != tb.repeat
        {
            diff.mark(DiffCategory::Tags);
        }
    }
}

fn compare_palettes(a: &Sprite, b: &Sprite, config: &DiffConfig, diff: &mut DocDiff) {
    match config.palettes {
        // Contents are only consulted inside the count-mismatch branch, so
        // equal-length palette lists always pass. See `PaletteRule`.
        PaletteRule::LengthOnly => {
            if a.palettes.len() != b.palettes.len() {
                for (pa, pb) in a.palettes.iter().zip(&b.palettes) {
                    if pa.count_diff(pb) > 0 {
                        diff.mark(DiffCategory::Palettes);
                        break;
                    }
                }
            }
        }
        PaletteRule::Contents => {
            if a.palettes.len() != b.palettes.len() {
                diff.mark(DiffCategory::Palettes);
                return;
            }
            for (pa, pb) in a.palettes.iter().zip(&b.palettes) {
                if pa.count_diff(pb) > 0 {
                    diff.mark(DiffCategory::Palettes);
                    break;
                }
            }
        }
    }
}

fn compare_tilesets(a: &Sprite, b: &Sprite, diff: &mut DocDiff) {
    let count_a = a.tilesets.as_ref().map_or(0, Tilesets::len);
    let count_b = b.tilesets.as_ref().map_or(0, Tilesets::len);
    if count_a != count_b {
        diff.mark(DiffCategory::Tilesets);
        return;
    }
    let (ta, tb) = match (&a.tilesets, &b.tilesets) {
        (Some(ta), Some(tb)) => (ta, tb),
        _ => return,
    };
    for (set_a, set_b) in ta.iter().zip(tb.iter()) {
        if set_a.tile_size() != set_b.tile_size() || set_a.len() != set_b.len() {
            diff.mark(DiffCategory::Tilesets);
            return;
        }
        for (tile_a, tile_b) in set_a.tiles().iter().zip(set_b.tiles()) {
            if !is_same_image(tile_a, tile_b) {
                // Stop the whole tileset pass, not just this tileset.
                diff.mark(DiffCategory::Tilesets);
                return;
            }
        }
    }
}

fn compare_layers(a: &Sprite, b: &Sprite, config: &DiffConfig, diff: &mut DocDiff) {
    if a.all_layers_count() != b.all_layers_count() {
        diff.mark(DiffCategory::Layers);
        return;
    }
    let layers_a = a.all_layers();
    let layers_b = b.all_layers();
    for (la, lb) in layers_a.iter().zip(&layers_b) {
        if layer_header_differs(la, lb) {
            // A layer-level difference ends the walk; remaining layers and
            // their cels are not inspected.
            diff.mark(DiffCategory::Layers);
            return;
        }

        // Cels cannot be paired up across mismatched frame counts.
        if diff.total_frames {
            continue;
        }

        for frame in 0..a.total_frames() {
            match (la.cel(frame), lb.cel(frame)) {
                (None, None) => {}
                (Some(cel_a), Some(cel_b)) => {
                    if cel_fields_flagged(cel_a, cel_b, config.cel_fields) {
                        diff.mark(DiffCategory::Cels);
                    }
                    match (&cel_a.image, &cel_b.image) {
                        (Some(img_a), Some(img_b)) => {
                            if img_a.bounds() != img_b.bounds() || !is_same_image(img_a, img_b) {
                                diff.mark(DiffCategory::Images);
                            }
                        }
                        (None, None) => {}
                        _ => diff.mark(DiffCategory::Images),
                    }
                }
                _ => diff.mark(DiffCategory::Cels),
            }
        }
    }
}

fn layer_header_differs(a: &Layer, b: &Layer) -> bool {
    a.kind() != b.kind()
        || a.name != b.name
        || a.persistent_flags() != b.persistent_flags()
        || variant_data_differs(a, b)
}

fn variant_data_differs(a: &Layer, b: &Layer) -> bool {
    match (&a.content, &b.content) {
        (LayerContent::Image { opacity: oa }, LayerContent::Image { opacity: ob }) => oa != ob,
        (
            LayerContent::Tilemap { tileset_index: ia },
            LayerContent::Tilemap { tileset_index: ib },
        ) => ia != ib,
        _ => false,
    }
}

fn cel_fields_flagged(a: &Cel, b: &Cel, rule: CelFieldRule) -> bool {
    match rule {
        CelFieldRule::AnyFieldEqual => {
            a.frame == b.frame || a.bounds == b.bounds || a.opacity == b.opacity
        }
        CelFieldRule::AnyFieldDiffers => {
            a.frame != b.frame || a.bounds != b.bounds || a.opacity != b.opacity
        }
    }
}

fn compare_color_profiles(a: &Sprite, b: &Sprite, diff: &mut DocDiff) {
    if !a.color_space.nearly_equal(&b.color_space) {
        diff.mark(DiffCategory::ColorProfiles);
    }
}

fn compare_grid_bounds(a: &Sprite, b: &Sprite, diff: &mut DocDiff) {
    if a.grid_bounds != b.grid_bounds {
        diff.mark(DiffCategory::GridBounds);
    }
}
