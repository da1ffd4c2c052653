use crate::coords::{CornerRadii, Size, UvRect, Vec2};
use crate::geometry::{clamp_radii, solve_reference_rect, ReferenceRect};

use super::CornerStyles;

/// Everything the rendering side needs to shade one decorated rectangle.
///
/// A plain value: recomputed whenever size or configuration changes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderParams {
    /// `(width / 2, height / 2)`, never negative.
    pub half_size: Vec2,
    /// Radii after overlap clamping.
    pub radii: CornerRadii,
    /// Rotated reference rectangle derived from `half_size * 2` and `radii`.
    pub reference: ReferenceRect,
    pub corner_styles: CornerStyles,
    pub uv: UvRect,
}

/// Clamps `radii` against `size`, solves the reference rectangle and bundles
/// the result with `styles` and `uv`.
pub fn refresh(size: Size, radii: CornerRadii, styles: CornerStyles, uv: UvRect) -> RenderParams {
    let clamped = clamp_radii(size, radii);
    let reference = solve_reference_rect(size, clamped);

    RenderParams {
        half_size: size.floored().half(),
        radii: clamped,
        reference,
        corner_styles: styles,
        uv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corner::CornerStyle;

    #[test]
    fn bundles_clamped_radii_and_passes_the_rest_through() {
        let size = Size::new(100.0, 100.0);
        let styles = CornerStyles::all(CornerStyle::Chamfered);
        let uv = UvRect::new(0.25, 0.25, 0.75, 0.5);

        let p = refresh(size, CornerRadii::all(80.0), styles, uv);

        assert_eq!(p.half_size, Vec2::new(50.0, 50.0));
        assert_eq!(p.radii, clamp_radii(size, CornerRadii::all(80.0)));
        assert_eq!(p.reference, solve_reference_rect(size, p.radii));
        assert_eq!(p.corner_styles, styles);
        assert_eq!(p.uv, uv);
    }

    #[test]
    fn degenerate_size_produces_zeroed_geometry() {
        let p = refresh(Size::new(-10.0, 0.0), CornerRadii::all(5.0), CornerStyles::default(), UvRect::FULL);
        assert_eq!(p.half_size, Vec2::zero());
        assert_eq!(p.radii, CornerRadii::zero());
        assert_eq!(p.reference, ReferenceRect::zero());
    }
}
