//! Corner geometry core.
//!
//! Two pure stages run on every recompute:
//! - [`clamp_radii`] shrinks adjacent radii so they never overlap along an edge
//! - [`solve_reference_rect`] places the 45°-rotated reference rectangle the
//!   shader measures corner distance against
//!
//! Neither stage keeps state, allocates or fails; bad input is clamped.

mod clamp;
pub mod range;
mod reference;

pub use clamp::{clamp_radii, SAFETY_FACTOR};
pub use range::{max_corner_radius, RadiusRange};
pub use reference::{solve_reference_rect, ReferenceRect, H_NORM, W_NORM};
