//! UI overlay binding set: texture, sampler and viewport transform.

use crate::bindings::{UI, UI_SAMPLER_SLOT, UI_TEXTURE_SLOT, UI_VIEWPORT_SLOT};
use crate::options::UiOptions;
use crate::transform::{SurfaceViewport, ViewportTransform, ViewportUniform};

/// The two explicit handles a UI draw binds at slots 0 and 1.
#[derive(Clone, Copy)]
pub struct UiDrawBinding<'a> {
    /// Sampled 2D color texture.
    pub texture: &'a wgpu::TextureView,
    /// Sampler applied to `texture`.
    pub sampler: &'a wgpu::Sampler,
}

/// Tracks the surface and recomputes the viewport transform only when it
/// changes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewportTracker {
    surface: Option<SurfaceViewport>,
    transform: ViewportTransform,
}

impl ViewportTracker {
    /// Feed the current surface. Returns the new transform when it differs
    /// from the last one.
    pub fn update(
        &mut self,
        surface: &SurfaceViewport,
    ) -> Option<ViewportTransform> {
        if self.surface.as_ref() == Some(surface) {
            return None;
        }
        self.surface = Some(*surface);
        let transform = ViewportTransform::from_surface(surface);
        if transform == self.transform {
            return None;
        }
        if !surface.is_valid() {
            log::warn!(
                "degenerate UI surface {:?} @ {} ppp",
                surface.size_in_pixels,
                surface.pixels_per_point
            );
        }
        self.transform = transform;
        Some(transform)
    }

    /// Transform derived from the last surface (identity before any update).
    #[must_use]
    pub const fn transform(&self) -> ViewportTransform {
        self.transform
    }
}

/// Owner of the `UI` bind-group layout and the viewport uniform buffer.
///
/// The viewport block is shared by every UI draw; only the texture and
/// sampler differ between bind groups.
pub struct UiBlock {
    layout: wgpu::BindGroupLayout,
    viewport_buffer: wgpu::Buffer,
    tracker: ViewportTracker,
}

impl UiBlock {
    /// Create the layout and the viewport buffer (identity until the first
    /// [`update_viewport`](Self::update_viewport)).
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        let viewport_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("UI Viewport Constants"),
            size: size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });
        viewport_buffer
            .slice(..)
            .get_mapped_range_mut()
            .copy_from_slice(bytemuck::bytes_of(&ViewportUniform::default()));
        viewport_buffer.unmap();

        Self {
            layout: UI.create_bind_group_layout(device),
            viewport_buffer,
            tracker: ViewportTracker::default(),
        }
    }

    /// Re-derive the viewport transform from `surface` and upload it if it
    /// changed. Returns whether an upload happened.
    pub fn update_viewport(
        &mut self,
        queue: &wgpu::Queue,
        surface: &SurfaceViewport,
    ) -> bool {
        let Some(transform) = self.tracker.update(surface) else {
            return false;
        };
        log::debug!(
            "UI viewport {}x{} @ {} ppp -> {:?}",
            surface.size_in_pixels[0],
            surface.size_in_pixels[1],
            surface.pixels_per_point,
            transform.to_array()
        );
        queue.write_buffer(
            &self.viewport_buffer,
            0,
            bytemuck::bytes_of(&transform.to_uniform()),
        );
        true
    }

    /// [`update_viewport`](Self::update_viewport) for a surface of
    /// `size_in_pixels` at the configured UI scale.
    pub fn resize(
        &mut self,
        queue: &wgpu::Queue,
        size_in_pixels: [u32; 2],
        options: &UiOptions,
    ) -> bool {
        self.update_viewport(
            queue,
            &SurfaceViewport::from_options(size_in_pixels, options),
        )
    }

    /// The transform currently uploaded.
    #[must_use]
    pub const fn viewport_transform(&self) -> ViewportTransform {
        self.tracker.transform()
    }

    /// Bind group for one UI texture/sampler pair.
    #[must_use]
    pub fn create_bind_group(
        &self,
        device: &wgpu::Device,
        binding: UiDrawBinding<'_>,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("UI Bind Group"),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: UI_TEXTURE_SLOT,
                    resource: wgpu::BindingResource::TextureView(
                        binding.texture,
                    ),
                },
                wgpu::BindGroupEntry {
                    binding: UI_SAMPLER_SLOT,
                    resource: wgpu::BindingResource::Sampler(binding.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: UI_VIEWPORT_SLOT,
                    resource: self.viewport_buffer.as_entire_binding(),
                },
            ],
        })
    }

    /// Layout for pipelines that read the UI set.
    #[must_use]
    pub const fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn first_update_recomputes() {
        let mut tracker = ViewportTracker::default();
        let t = tracker.update(&SurfaceViewport::new([800, 600], 1.0));
        assert!(t.is_some());
        assert_eq!(tracker.transform(), t.unwrap());
    }

    #[test]
    fn unchanged_surface_does_not_recompute() {
        let mut tracker = ViewportTracker::default();
        let surface = SurfaceViewport::new([800, 600], 1.0);
        let _ = tracker.update(&surface);
        assert!(tracker.update(&surface).is_none());
    }

    #[test]
    fn resize_recomputes_and_keeps_orientation() {
        let mut tracker = ViewportTracker::default();
        let small = tracker
            .update(&SurfaceViewport::new([800, 600], 1.0))
            .unwrap();
        let large = tracker
            .update(&SurfaceViewport::new([1600, 1200], 1.0))
            .unwrap();
        assert_ne!(small, large);
        assert_eq!(large.apply(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        let corner = large.apply(Vec2::new(1600.0, 1200.0));
        assert!((corner - Vec2::new(1.0, -1.0)).abs().max_element() < 1e-5);
    }

    #[test]
    fn scale_change_alone_recomputes() {
        let mut tracker = ViewportTracker::default();
        let _ = tracker.update(&SurfaceViewport::new([800, 600], 1.0));
        let t = tracker
            .update(&SurfaceViewport::new([800, 600], 2.0))
            .unwrap();
        let corner = t.apply(Vec2::new(400.0, 300.0));
        assert!((corner - Vec2::new(1.0, -1.0)).abs().max_element() < 1e-5);
    }

    #[test]
    fn zero_sized_surface_stays_finite() {
        let mut tracker = ViewportTracker::default();
        let t = tracker
            .update(&SurfaceViewport::new([0, 0], 1.0))
            .unwrap();
        assert!(t.to_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn configured_ui_scale_reaches_the_transform() {
        let mut tracker = ViewportTracker::default();
        let options = UiOptions {
            pixels_per_point: 2.0,
            ..UiOptions::default()
        };
        let t = tracker
            .update(&SurfaceViewport::from_options([800, 600], &options))
            .unwrap();
        let corner = t.apply(Vec2::new(400.0, 300.0));
        assert!((corner - Vec2::new(1.0, -1.0)).abs().max_element() < 1e-5);
    }

    #[test]
    fn nan_scale_surface_settles_after_one_update() {
        let mut tracker = ViewportTracker::default();
        let surface = SurfaceViewport::new([800, 600], f32::NAN);
        let first = tracker.update(&surface).unwrap();
        assert!(first.to_array().iter().all(|v| v.is_finite()));
        assert!(tracker.update(&surface).is_none());
        assert_eq!(tracker.transform(), first);
    }
}
