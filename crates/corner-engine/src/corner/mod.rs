//! Corner decoration: configuration, parameter assembly and the host-facing adapter.
//!
//! Responsibilities:
//! - hold the user-facing configuration (four radii, four styles)
//! - turn size + configuration into [`RenderParams`] via the pure geometry core
//! - drive a host-provided material through enable / validate / resize / destroy
//!
//! Only [`CornerDecoration`] carries state. [`refresh`] is a plain function and
//! can be called without any renderer attached.

mod config;
mod decoration;
mod host;
mod params;
mod style;

pub use config::CornerConfig;
pub use decoration::{CornerDecoration, ListenerId};
pub use host::CornerHost;
pub use params::{refresh, RenderParams};
pub use style::{CornerStyle, CornerStyles};
