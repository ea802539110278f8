use glam::Vec2;

use crate::options::UiOptions;

/// Output surface size and DPI scale.
///
/// UI geometry is laid out in logical points; the surface is
/// `size_in_pixels` physical pixels, with `pixels_per_point` pixels per
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceViewport {
    /// Physical surface size `[width, height]`.
    pub size_in_pixels: [u32; 2],
    /// Physical pixels per logical point.
    pub pixels_per_point: f32,
}

impl SurfaceViewport {
    /// Surface of the given pixel size and DPI scale.
    #[must_use]
    pub const fn new(size_in_pixels: [u32; 2], pixels_per_point: f32) -> Self {
        Self {
            size_in_pixels,
            pixels_per_point,
        }
    }

    /// Surface of the given pixel size at the UI scale from `options`.
    #[must_use]
    pub const fn from_options(
        size_in_pixels: [u32; 2],
        options: &UiOptions,
    ) -> Self {
        Self::new(size_in_pixels, options.pixels_per_point)
    }

    /// Surface size in logical points.
    #[must_use]
    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(
            self.size_in_pixels[0] as f32,
            self.size_in_pixels[1] as f32,
        ) / self.pixels_per_point
    }

    /// Non-zero size and a finite, positive scale.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.size_in_pixels[0] > 0
            && self.size_in_pixels[1] > 0
            && self.pixels_per_point.is_finite()
            && self.pixels_per_point > 0.0
    }
}

/// 2D affine map from UI space to clip space:
/// `clip_xy = ui_xy * scale + offset`.
///
/// Packed for the GPU as `(sx, sy, ox, oy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Per-axis scale `(sx, sy)`.
    pub scale: Vec2,
    /// Per-axis offset `(ox, oy)`.
    pub offset: Vec2,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    /// UI coordinates equal clip coordinates.
    pub const IDENTITY: Self = Self {
        scale: Vec2::ONE,
        offset: Vec2::ZERO,
    };

    /// Build from the four packed components.
    #[must_use]
    pub const fn new(sx: f32, sy: f32, ox: f32, oy: f32) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
            offset: Vec2::new(ox, oy),
        }
    }

    /// Unpack `(sx, sy, ox, oy)`.
    #[must_use]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Pack as `(sx, sy, ox, oy)`.
    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        [self.scale.x, self.scale.y, self.offset.x, self.offset.y]
    }

    /// Transform mapping the surface's logical points onto clip space.
    ///
    /// Point `(0, 0)` lands on clip `(-1, +1)` (top-left) and the far corner
    /// of the surface on `(+1, -1)`. A zero-sized axis is treated as one
    /// pixel and a non-finite or non-positive scale as `1.0`, so the result
    /// stays finite.
    #[must_use]
    pub fn from_surface(surface: &SurfaceViewport) -> Self {
        let width = surface.size_in_pixels[0].max(1) as f32;
        let height = surface.size_in_pixels[1].max(1) as f32;
        let ppp = surface.pixels_per_point;
        let ppp = if ppp.is_finite() && ppp > 0.0 { ppp } else { 1.0 };
        Self::new(2.0 * ppp / width, -2.0 * ppp / height, -1.0, 1.0)
    }

    /// Map a UI-space point to clip space.
    #[must_use]
    pub fn apply(&self, ui: Vec2) -> Vec2 {
        ui * self.scale + self.offset
    }

    /// GPU layout of this transform.
    #[must_use]
    pub fn to_uniform(&self) -> ViewportUniform {
        ViewportUniform {
            viewport_transform: self.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block bound at the UI set's slot 2.
pub struct ViewportUniform {
    /// xy: scale, zw: offset
    pub viewport_transform: [f32; 4],
}

const _: () = assert!(size_of::<ViewportUniform>() == 16);

impl Default for ViewportUniform {
    fn default() -> Self {
        ViewportTransform::IDENTITY.to_uniform()
    }
}
