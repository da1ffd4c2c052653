//! GPU side of a corner decoration.
//!
//! A material owns the uniform the corner shader reads. The shader itself is
//! supplied by the host pipeline; this module only defines the uniform layout
//! and keeps it up to date.
//!
//! Convention:
//! - One uniform buffer per decorated rectangle, bound at binding 0.
//! - Every field is a 4-vector so the std140 layout needs no padding rules.

mod ctx;
mod material;
mod uniform;

pub use ctx::RenderCtx;
pub use material::{CornerMaterial, GpuCornerHost, GpuCornerMaterial};
pub use uniform::{CornerUniform, CORNER_UNIFORM_SIZE};
