//! Color space description with an approximate-equality predicate.
//!
//! Documents round-trip their transfer gamma through files that store it with
//! limited precision, so two snapshots of the same document can disagree in
//! the low bits. [`ColorSpace::nearly_equal`] is the comparison the diff uses
//! instead of exact equality.

/// Tolerance for transfer-gamma comparison.
const GAMMA_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpaceKind {
    /// No color management; pixel values are passed through as-is.
    None,
    Srgb,
    /// An RGB space described only by its transfer gamma.
    Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpace {
    pub kind: ColorSpaceKind,
    pub gamma: f64,
}

impl ColorSpace {
    pub fn none() -> ColorSpace {
        ColorSpace {
            kind: ColorSpaceKind::None,
            gamma: 1.0,
        }
    }

    pub fn srgb() -> ColorSpace {
        ColorSpace {
            kind: ColorSpaceKind::Srgb,
            gamma: 2.2,
        }
    }

    pub fn rgb_with_gamma(gamma: f64) -> ColorSpace {
        ColorSpace {
            kind: ColorSpaceKind::Rgb,
            gamma,
        }
    }

    /// Equality tolerant of floating-point noise in the gamma value.
    pub fn nearly_equal(&self, other: &ColorSpace) -> bool {
        self.kind == other.kind && (self.gamma - other.gamma).abs() <= GAMMA_EPSILON
    }
}

impl Default for ColorSpace {
    fn default() -> Self {
        ColorSpace::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_noise_within_epsilon_is_equal() {
        let a = ColorSpace::rgb_with_gamma(2.2);
        let b = ColorSpace::rgb_with_gamma(2.2 + 5e-4);
        assert!(a.nearly_equal(&b));
        assert!(b.nearly_equal(&a));
    }

    #[test]
    fn different_kind_is_never_equal() {
        let a = ColorSpace::srgb();
        let b = ColorSpace::rgb_with_gamma(2.2);
        assert!(!a.nearly_equal(&b));
    }

    #[test]
    fn gamma_beyond_epsilon_differs() {
        let a = ColorSpace::rgb_with_gamma(1.8);
        let b = ColorSpace::rgb_with_gamma(2.2);
        assert!(!a.nearly_equal(&b));
    }
}
