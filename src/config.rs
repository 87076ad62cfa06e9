//! Configuration for the comparator.
//!
//! The shipped comparison logic carries two quirks from years of production
//! use: the cel field check flags on field *equality* rather than inequality,
//! and palette contents are only inspected when the palette counts disagree.
//! Both behaviors are selectable per rule; [`DiffConfig::compatible`] is the
//! bit-faithful preset and [`DiffConfig::strict`] the fully corrected one.

use serde::{Deserialize, Serialize};

/// How cel fields (frame, bounds, opacity) are compared for two present cels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelFieldRule {
    /// Flag when any field is *equal* between the two cels. Faithful to the
    /// shipped behavior, which fires for almost any pair of present cels.
    AnyFieldEqual,
    /// Flag when any field differs.
    AnyFieldDiffers,
}

/// How palette sequences are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteRule {
    /// Contents are only inspected when the palette counts differ; two
    /// equal-length palette lists always compare as equal. Faithful to the
    /// shipped behavior.
    LengthOnly,
    /// A count mismatch or any pairwise content difference is flagged.
    Contents,
}

/// Behavioral knobs for [`compare_docs`](crate::compare_docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    pub cel_fields: CelFieldRule,
    pub palettes: PaletteRule,
}

impl Default for DiffConfig {
    /// Corrected cel semantics, legacy palette semantics.
    ///
    /// Under [`CelFieldRule::AnyFieldEqual`] a document with cels flags
    /// `cels` even against itself, which breaks the contract that comparing
    /// identical snapshots reports no change. The default therefore uses the
    /// corrected cel rule; the palette rule stays legacy because it only
    /// under-reports and never produces false positives.
    fn default() -> Self {
        DiffConfig {
            cel_fields: CelFieldRule::AnyFieldDiffers,
            palettes: PaletteRule::LengthOnly,
        }
    }
}

impl DiffConfig {
    /// Bit-faithful reproduction of the shipped comparison, quirks included.
    pub fn compatible() -> DiffConfig {
        DiffConfig {
            cel_fields: CelFieldRule::AnyFieldEqual,
            palettes: PaletteRule::LengthOnly,
        }
    }

    /// Corrected semantics: every category flags on actual differences only.
    pub fn strict() -> DiffConfig {
        DiffConfig {
            cel_fields: CelFieldRule::AnyFieldDiffers,
            palettes: PaletteRule::Contents,
        }
    }
}
