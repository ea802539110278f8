//! View/projection uniform block for the 3D scene pass.

use super::uniform_ring::{UniformRing, UniformSlot};
use crate::bindings::{VIEW, VIEW_CONSTANTS_SLOT};
use crate::transform::{ViewTransform, ViewUniform};

/// A view pushed during the current frame.
pub type ViewSlot = UniformSlot;

/// Owner of the `VIEW` bind-group layout and the per-frame view uniforms.
///
/// Call [`begin_frame`](Self::begin_frame) once per frame, then
/// [`push`](Self::push) one [`ViewTransform`] per view drawn. Each push gets
/// its own buffer, so a frame that renders the scene from two cameras binds
/// two distinct blocks.
pub struct ViewBlock {
    layout: wgpu::BindGroupLayout,
    ring: UniformRing<ViewUniform>,
}

impl ViewBlock {
    /// Create the layout; buffers are allocated lazily on push.
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            layout: VIEW.create_bind_group_layout(device),
            ring: UniformRing::new("View Constants", VIEW_CONSTANTS_SLOT),
        }
    }

    /// Recycle last frame's buffers.
    pub fn begin_frame(&mut self) {
        self.ring.begin_frame();
    }

    /// Upload a view/projection pair and return its slot for this frame.
    pub fn push(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        transform: &ViewTransform,
    ) -> ViewSlot {
        self.ring
            .push(device, queue, &self.layout, &transform.to_uniform())
    }

    /// Bind group for `slot`, or `None` if it was not pushed this frame.
    #[must_use]
    pub fn bind_group(&self, slot: ViewSlot) -> Option<&wgpu::BindGroup> {
        self.ring.bind_group(slot)
    }

    /// Layout for pipelines that read the view set.
    #[must_use]
    pub const fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Views pushed this frame.
    #[must_use]
    pub const fn views_this_frame(&self) -> usize {
        self.ring.len()
    }
}
