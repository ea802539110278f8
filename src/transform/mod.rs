//! Coordinate-space transforms and their GPU uniform layouts.
//!
//! Conventions:
//! - World space is right-handed with +Z up.
//! - Clip depth is `[0, 1]` (wgpu convention).
//! - UI space is logical points, origin top-left, +X right, +Y down. The
//!   viewport transform maps it onto clip space with +Y up.

mod scissor;
mod view;
mod viewport;

pub use scissor::ScissorRect;
pub use view::{ViewTransform, ViewUniform};
pub use viewport::{SurfaceViewport, ViewportTransform, ViewportUniform};
