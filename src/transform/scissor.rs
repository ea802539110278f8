use glam::Vec2;

use super::SurfaceViewport;

/// Physical-pixel scissor rectangle for one UI draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScissorRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScissorRect {
    /// The whole surface.
    #[must_use]
    pub const fn full(surface: &SurfaceViewport) -> Self {
        Self {
            x: 0,
            y: 0,
            width: surface.size_in_pixels[0],
            height: surface.size_in_pixels[1],
        }
    }

    /// Convert a logical-point clip rect (`min`, `max` corners) to physical
    /// pixels, rounding each edge and clamping to the surface.
    ///
    /// Inverted or off-surface rects yield a zero-area rect; callers skip
    /// the draw (see [`ScissorRect::is_empty`]).
    #[must_use]
    pub fn from_logical(min: Vec2, max: Vec2, surface: &SurfaceViewport) -> Self {
        let [surface_w, surface_h] = surface.size_in_pixels;
        let to_px = |v: f32, limit: u32| -> u32 {
            let px = (v * surface.pixels_per_point).round();
            if px.is_nan() || px <= 0.0 {
                0
            } else {
                (px as u32).min(limit)
            }
        };

        let min_x = to_px(min.x, surface_w);
        let min_y = to_px(min.y, surface_h);
        let max_x = to_px(max.x, surface_w);
        let max_y = to_px(max.y, surface_h);

        Self {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x),
            height: max_y.saturating_sub(min_y),
        }
    }

    /// Zero width or height.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_pixels_per_point() {
        let surface = SurfaceViewport::new([1600, 1200], 2.0);
        let r = ScissorRect::from_logical(
            Vec2::new(10.0, 20.0),
            Vec2::new(110.0, 70.0),
            &surface,
        );
        assert_eq!(
            r,
            ScissorRect {
                x: 20,
                y: 40,
                width: 200,
                height: 100,
            }
        );
    }

    #[test]
    fn clamps_to_surface() {
        let surface = SurfaceViewport::new([800, 600], 1.0);
        let r = ScissorRect::from_logical(
            Vec2::new(-50.0, 500.0),
            Vec2::new(900.0, 700.0),
            &surface,
        );
        assert_eq!(r.x, 0);
        assert_eq!(r.width, 800);
        assert_eq!(r.y, 500);
        assert_eq!(r.height, 100);
    }

    #[test]
    fn inverted_rect_is_empty() {
        let surface = SurfaceViewport::new([800, 600], 1.0);
        let r = ScissorRect::from_logical(
            Vec2::new(100.0, 100.0),
            Vec2::new(50.0, 150.0),
            &surface,
        );
        assert!(r.is_empty());
        assert!(!ScissorRect::full(&surface).is_empty());
    }
}
