use crate::coords::{CornerRadii, Size};

/// Fraction of an edge two adjacent radii may cover together.
///
/// Keeping the sum strictly below the edge length stops the reference
/// rectangle from collapsing to zero width on that side.
pub const SAFETY_FACTOR: f32 = 0.99;

/// Shrinks requested radii so adjacent corners do not overlap.
///
/// Edges are checked once, in order: top, bottom, left, right. A pair whose sum
/// exceeds `edge * SAFETY_FACTOR` is scaled down uniformly, keeping its ratio.
/// Each corner sits on two edges, so a later check scales values an earlier one
/// already shrank. There is no second pass; the order is part of the contract.
///
/// Negative and NaN radii (and dimensions) count as zero. Output never exceeds
/// the floored input.
pub fn clamp_radii(size: Size, radii: CornerRadii) -> CornerRadii {
    let size = size.floored();
    let mut r = finite_radii(radii.floored(), size);

    let max_w = size.width * SAFETY_FACTOR;
    let max_h = size.height * SAFETY_FACTOR;

    shrink_pair(&mut r.top_left, &mut r.top_right, max_w);
    shrink_pair(&mut r.bottom_left, &mut r.bottom_right, max_w);
    shrink_pair(&mut r.top_left, &mut r.bottom_left, max_h);
    shrink_pair(&mut r.top_right, &mut r.bottom_right, max_h);

    r
}

fn shrink_pair(a: &mut f32, b: &mut f32, limit: f32) {
    let sum = *a + *b;
    if sum > limit {
        let scale = if sum.is_finite() {
            limit / sum
        } else {
            // Two huge finite radii overflow the sum; the halved ratio is the same.
            (limit * 0.5) / (*a * 0.5 + *b * 0.5)
        };
        *a *= scale;
        *b *= scale;
    }
}

// An infinite radius would turn `limit / sum` into 0 and the product into NaN.
fn finite_radii(r: CornerRadii, size: Size) -> CornerRadii {
    let cap = size.width.max(size.height);
    let fix = |v: f32| if v.is_finite() { v } else { cap };
    CornerRadii::new(fix(r.top_left), fix(r.top_right), fix(r.bottom_right), fix(r.bottom_left))
}
