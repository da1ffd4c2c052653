use crate::coords::{Corner, CornerRadii};

use super::{CornerStyle, CornerStyles};

/// Externally configurable state of a decorated rectangle.
///
/// Radii are stored as requested; clamping happens at recompute time so a
/// later resize can restore a radius that an earlier, smaller size cut down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerConfig {
    pub radii: CornerRadii,
    pub styles: CornerStyles,
}

impl CornerConfig {
    /// Radius every corner starts with.
    pub const DEFAULT_RADIUS: f32 = 40.0;

    #[inline]
    pub const fn new(radii: CornerRadii, styles: CornerStyles) -> Self {
        Self { radii, styles }
    }

    pub fn with_radius(mut self, corner: Corner, radius: f32) -> Self {
        self.radii.set(corner, radius);
        self
    }

    pub fn with_styles(mut self, styles: CornerStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_style(mut self, corner: Corner, style: CornerStyle) -> Self {
        self.styles.set(corner, style);
        self
    }
}

impl Default for CornerConfig {
    fn default() -> Self {
        Self::new(CornerRadii::all(Self::DEFAULT_RADIUS), CornerStyles::all(CornerStyle::Rounded))
    }
}
