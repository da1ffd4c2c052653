use crate::coords::{CornerRadii, Size, Vec2};

/// +X rotated clockwise by 45°.
pub const W_NORM: Vec2 = Vec2::new(0.7071068, -0.7071068);

/// +X rotated counter-clockwise by 45°.
pub const H_NORM: Vec2 = Vec2::new(0.7071068, 0.7071068);

/// Inner rectangle the shader measures corner distance against.
///
/// Its width runs along [`W_NORM`] and its height along [`H_NORM`], so it is
/// rotated 45° relative to the decorated rectangle. `origin` is its center,
/// relative to the center of the decorated rectangle (+Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ReferenceRect {
    pub origin: Vec2,
    pub half_width: f32,
    pub half_height: f32,
}

impl ReferenceRect {
    #[inline]
    pub const fn zero() -> Self {
        Self { origin: Vec2::zero(), half_width: 0.0, half_height: 0.0 }
    }

    /// `(origin.x, origin.y, half_width, half_height)`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.origin.x, self.origin.y, self.half_width, self.half_height]
    }
}

/// Computes the reference rectangle for `size` and already-clamped `radii`.
///
/// Opposite corners pair up: TL + BR bound the width, BL + TR bound the height,
/// because those sides of the rotated rectangle face those corners.
///
/// A degenerate size yields [`ReferenceRect::zero`].
pub fn solve_reference_rect(size: Size, radii: CornerRadii) -> ReferenceRect {
    if size.is_degenerate() {
        return ReferenceRect::zero();
    }

    let w = size.width;
    let h = size.height;
    let r = radii;

    // Left side to right side, projected on W_NORM.
    let a = Vec2::new(w, -h + r.top_left + r.bottom_right);
    let half_width = a.dot(W_NORM) * 0.5;

    // Bottom side to top side, projected on H_NORM.
    let b = Vec2::new(w, h - r.bottom_left - r.top_right);
    let half_height = b.dot(H_NORM) * 0.5;

    // E: where the TL arc meets the top edge. G: top-left corner of the reference rect.
    let ef = Vec2::new(w - r.top_left - r.top_right, 0.0);
    let eg = H_NORM * ef.dot(H_NORM);
    let e = Vec2::new(r.top_left - w / 2.0, h / 2.0);

    let origin = e + eg + W_NORM * half_width + H_NORM * -half_height;

    ReferenceRect { origin, half_width, half_height }
}
