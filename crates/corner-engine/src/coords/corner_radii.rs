/// One of the four corners of a rectangle.
///
/// Declaration order matches the packing order of [`CornerRadii::to_array`]
/// and of the shader's corner vectors: TL, TR, BR, BL.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];
}

/// Per-corner radii for a decorated rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// For a chamfered corner the radius is the length cut from each adjoining edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// Square corners.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, radius: f32) {
        match corner {
            Corner::TopLeft => self.top_left = radius,
            Corner::TopRight => self.top_right = radius,
            Corner::BottomRight => self.bottom_right = radius,
            Corner::BottomLeft => self.bottom_left = radius,
        }
    }

    /// Copy with negative and NaN radii replaced by zero.
    ///
    /// Slider-driven input can pass through negative values mid-drag.
    #[inline]
    pub fn floored(self) -> Self {
        Self::new(
            self.top_left.max(0.0),
            self.top_right.max(0.0),
            self.bottom_right.max(0.0),
            self.bottom_left.max(0.0),
        )
    }

    /// Radii in TL, TR, BR, BL order.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

impl From<[f32; 4]> for CornerRadii {
    #[inline]
    fn from([tl, tr, br, bl]: [f32; 4]) -> Self {
        Self::new(tl, tr, br, bl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_address_the_named_corner() {
        let mut r = CornerRadii::zero();
        r.set(Corner::BottomRight, 7.0);
        assert_eq!(r.bottom_right, 7.0);
        assert_eq!(r.get(Corner::BottomRight), 7.0);
        assert_eq!(r.get(Corner::TopLeft), 0.0);
    }

    #[test]
    fn floored_replaces_negative_and_nan() {
        let r = CornerRadii::new(-1.0, f32::NAN, 3.0, 0.0).floored();
        assert_eq!(r, CornerRadii::new(0.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn array_order_matches_corner_order() {
        let r = CornerRadii::new(1.0, 2.0, 3.0, 4.0);
        let arr = r.to_array();
        for (i, corner) in Corner::ALL.iter().enumerate() {
            assert_eq!(arr[i], r.get(*corner));
        }
        assert_eq!(CornerRadii::from(arr), r);
    }
}
