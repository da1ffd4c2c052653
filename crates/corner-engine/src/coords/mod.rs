//! Coordinate and geometry value types shared by the geometry core and renderers.
//!
//! Canonical space for corner math:
//! - Logical pixels
//! - Origin at the rectangle center
//! - +X right, +Y up
//!
//! Only the reference-rectangle origin lives in this centered frame; sizes and
//! radii are plain lengths.

mod corner_radii;
mod size;
mod uv_rect;
mod vec2;

pub use corner_radii::{Corner, CornerRadii};
pub use size::Size;
pub use uv_rect::UvRect;
pub use vec2::Vec2;
