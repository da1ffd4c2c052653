//! Corner engine crate.
//!
//! Computes the parameters a distance-field shader needs to draw a rectangle
//! with four independently rounded or chamfered corners, and owns the thin
//! lifecycle adapter that hands those parameters to a GPU material.

pub mod coords;
pub mod corner;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
