use crate::coords::Corner;

/// How a corner is cut. Only the shader reads it; corner math ignores it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum CornerStyle {
    /// Circular arc.
    #[default]
    Rounded = 0,
    /// Straight 45° cut.
    Chamfered = 1,
}

impl CornerStyle {
    /// Value written into the shader's corner-type vector.
    #[inline]
    pub fn shader_value(self) -> f32 {
        self as u8 as f32
    }
}

/// One [`CornerStyle`] per corner.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CornerStyles {
    pub top_left: CornerStyle,
    pub top_right: CornerStyle,
    pub bottom_right: CornerStyle,
    pub bottom_left: CornerStyle,
}

impl CornerStyles {
    #[inline]
    pub const fn new(
        top_left: CornerStyle,
        top_right: CornerStyle,
        bottom_right: CornerStyle,
        bottom_left: CornerStyle,
    ) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    #[inline]
    pub const fn all(style: CornerStyle) -> Self {
        Self::new(style, style, style, style)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> CornerStyle {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, style: CornerStyle) {
        match corner {
            Corner::TopLeft => self.top_left = style,
            Corner::TopRight => self.top_right = style,
            Corner::BottomRight => self.bottom_right = style,
            Corner::BottomLeft => self.bottom_left = style,
        }
    }

    /// Styles as shader values in TL, TR, BR, BL order.
    #[inline]
    pub fn to_shader_vec(self) -> [f32; 4] {
        [
            self.top_left.shader_value(),
            self.top_right.shader_value(),
            self.bottom_right.shader_value(),
            self.bottom_left.shader_value(),
        ]
    }
}
