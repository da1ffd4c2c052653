//! GPU device acquisition without a window.
//!
//! Decorations only need a device and queue to own their uniforms, so tools
//! and tests can run without creating a surface.

mod headless;

pub use headless::{HeadlessGpu, HeadlessGpuInit};
