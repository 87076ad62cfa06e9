//! Behavior of the compatible (bit-faithful) and strict presets where they
//! disagree with the default configuration.

mod common;

use common::base_doc;
use sprite_diff::{compare_docs, Color, DiffConfig, DocDiff, Palette};

#[test]
fn compatible_rule_flags_any_pair_of_present_cels() {
    // Two present cels always share their frame index, so the legacy
    // OR-of-equalities check fires even for identical documents.
    let a = base_doc();
    let b = base_doc();
    let diff = compare_docs(&a, &b, &DiffConfig::compatible());
    assert!(diff.cels);
    assert!(diff.anything);
    assert!(diff.is_consistent());
}

#[test]
fn default_rule_keeps_identical_documents_clean() {
    let a = base_doc();
    let b = base_doc();
    assert_eq!(compare_docs(&a, &b, &DiffConfig::default()), DocDiff::default());
}

#[test]
fn strict_preset_keeps_identical_documents_clean() {
    let a = base_doc();
    let b = base_doc();
    assert_eq!(compare_docs(&a, &b, &DiffConfig::strict()), DocDiff::default());
}

#[test]
fn strict_palettes_flag_equal_length_content_changes() {
    let a = base_doc();
    let mut b = base_doc();
    b.sprite.palettes[0].set_color(0, Color::rgb(123, 45, 67));

    assert!(!compare_docs(&a, &b, &DiffConfig::default()).palettes);
    assert!(!compare_docs(&a, &b, &DiffConfig::compatible()).palettes);
    assert!(compare_docs(&a, &b, &DiffConfig::strict()).palettes);
}

#[test]
fn strict_palettes_flag_any_count_mismatch() {
    // Legacy mode lets a purely appended palette through; strict flags the
    // count change itself.
    let a = base_doc();
    let mut b = base_doc();
    b.sprite.palettes.push(Palette::new(vec![Color::BLACK]));

    assert!(!compare_docs(&a, &b, &DiffConfig::compatible()).palettes);
    assert!(compare_docs(&a, &b, &DiffConfig::strict()).palettes);
}

#[test]
fn cel_presence_mismatch_flags_cels_under_every_rule() {
    let a = base_doc();
    let mut b = base_doc();
    b.sprite.root_layers_mut()[0].remove_cel(1);

    for config in [
        DiffConfig::default(),
        DiffConfig::compatible(),
        DiffConfig::strict(),
    ] {
        assert!(compare_docs(&a, &b, &config).cels);
    }
}
