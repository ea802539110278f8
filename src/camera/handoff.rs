//! Latest-value handoff of view transforms between threads.
//!
//! A camera system running off the render thread publishes each new
//! [`ViewTransform`]; the render thread picks up the most recent one before
//! uploading. Backed by a lock-free triple buffer, so neither side blocks and
//! a half-written transform is never observed.

use crate::transform::ViewTransform;

/// Producer side, owned by the camera system.
pub struct TransformPublisher {
    input: triple_buffer::Input<ViewTransform>,
}

/// Consumer side, owned by the render thread.
pub struct TransformReceiver {
    output: triple_buffer::Output<ViewTransform>,
}

/// Create a connected publisher/receiver pair seeded with `initial`.
#[must_use]
pub fn transform_handoff(
    initial: ViewTransform,
) -> (TransformPublisher, TransformReceiver) {
    let (input, output) = triple_buffer::triple_buffer(&initial);
    (TransformPublisher { input }, TransformReceiver { output })
}

impl TransformPublisher {
    /// Publish a complete transform, replacing any not yet consumed.
    pub fn publish(&mut self, transform: ViewTransform) {
        self.input.write(transform);
    }
}

impl TransformReceiver {
    /// The most recently published transform.
    pub fn latest(&mut self) -> ViewTransform {
        *self.output.read()
    }

    /// The most recently published transform, if one arrived since the last
    /// call to [`poll`](Self::poll) or [`latest`](Self::latest).
    pub fn poll(&mut self) -> Option<ViewTransform> {
        if self.output.update() {
            Some(*self.output.read())
        } else {
            None
        }
    }
}
