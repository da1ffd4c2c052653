use super::Vec2;

/// Rectangle size in logical pixels, as reported by layout.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// True when either dimension is non-positive or non-finite.
    ///
    /// A degenerate rectangle has no meaningful corners; the solver returns a
    /// zero reference rectangle for it.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }

    /// Copy with negative and NaN dimensions replaced by zero.
    #[inline]
    pub fn floored(self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }

    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// `(width / 2, height / 2)`.
    #[inline]
    pub fn half(self) -> Vec2 {
        self.to_vec2() * 0.5
    }
}
