/// Sub-texture region sampled by the shader, in normalized texture coordinates.
///
/// The corner math never reads it; it is forwarded from the sprite lookup to
/// the material unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UvRect {
    pub u_min: f32,
    pub v_min: f32,
    pub u_max: f32,
    pub v_max: f32,
}

impl UvRect {
    /// Whole texture, `0..1` on both axes.
    pub const FULL: UvRect = UvRect::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(u_min: f32, v_min: f32, u_max: f32, v_max: f32) -> Self {
        Self { u_min, v_min, u_max, v_max }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.u_min, self.v_min, self.u_max, self.v_max]
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}
