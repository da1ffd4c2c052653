//! Slider bounds for editing corner radii in a property inspector.

use crate::coords::Size;

/// Upper bound used when the rectangle has no usable size yet.
pub const FALLBACK_SLIDER_MAX: f32 = 100.0;

/// Largest radius that fits a corner on its own: half the shorter side.
///
/// Zero for a degenerate size.
#[inline]
pub fn max_corner_radius(size: Size) -> f32 {
    if size.is_degenerate() {
        0.0
    } else {
        size.min_side() * 0.5
    }
}

/// Editable range for a single radius: `[0, max]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadiusRange {
    pub max: f32,
}

impl RadiusRange {
    pub fn for_size(size: Size) -> Self {
        let max = max_corner_radius(size);
        Self { max: if max > 0.0 { max } else { FALLBACK_SLIDER_MAX } }
    }

    /// Clamps a typed or dragged value into the range. NaN maps to 0.
    #[inline]
    pub fn clamp_input(self, value: f32) -> f32 {
        value.max(0.0).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_radius_is_half_the_shorter_side() {
        assert_eq!(max_corner_radius(Size::new(200.0, 80.0)), 40.0);
        assert_eq!(max_corner_radius(Size::new(30.0, 300.0)), 15.0);
    }

    #[test]
    fn degenerate_size_falls_back() {
        assert_eq!(max_corner_radius(Size::zero()), 0.0);
        assert_eq!(RadiusRange::for_size(Size::zero()).max, FALLBACK_SLIDER_MAX);
    }

    #[test]
    fn clamp_input_bounds_both_ends() {
        let range = RadiusRange::for_size(Size::new(100.0, 60.0));
        assert_eq!(range.max, 30.0);
        assert_eq!(range.clamp_input(-4.0), 0.0);
        assert_eq!(range.clamp_input(12.5), 12.5);
        assert_eq!(range.clamp_input(99.0), 30.0);
        assert_eq!(range.clamp_input(f32::NAN), 0.0);
    }
}
