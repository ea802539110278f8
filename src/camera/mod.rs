//! Camera system producing the view/projection transforms.
//!
//! Provides a free-flying Z-up camera and a lock-free handoff for publishing
//! its transforms from another thread.

/// Core camera struct and matrix construction.
pub mod core;
/// Cross-thread latest-value transform handoff.
pub mod handoff;

pub use self::core::Camera;
pub use handoff::{transform_handoff, TransformPublisher, TransformReceiver};
