//! UI texture and sampler creation.

use crate::options::SamplerOptions;

/// Texel format of UI color textures.
pub const UI_TEXTURE_FORMAT: wgpu::TextureFormat =
    wgpu::TextureFormat::Rgba8Unorm;

/// A sampled UI color texture and its default view.
///
/// Created with `TEXTURE_BINDING | COPY_DST` usage: the contents are written
/// from the CPU with [`ColorTexture::write`] and read through the UI set's
/// texture slot.
pub struct ColorTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    size: [u32; 2],
}

impl ColorTexture {
    /// Texture size in texels.
    #[must_use]
    pub const fn size(&self) -> [u32; 2] {
        self.size
    }

    /// Write tightly packed RGBA8 rows into the region starting at `origin`.
    ///
    /// Returns `false` (and writes nothing) when the region falls outside
    /// the texture or `rgba` does not hold exactly `width * height` texels.
    pub fn write(
        &self,
        queue: &wgpu::Queue,
        origin: [u32; 2],
        region: [u32; 2],
        rgba: &[u8],
    ) -> bool {
        if !region_fits(self.size, origin, region, rgba.len()) {
            log::warn!(
                "rejected UI texture write: {region:?} at {origin:?} into {:?} \
                 with {} bytes",
                self.size,
                rgba.len()
            );
            return false;
        }
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: origin[0],
                    y: origin[1],
                    z: 0,
                },
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * region[0]),
                rows_per_image: Some(region[1]),
            },
            extent(region),
        );
        true
    }
}

fn extent(size: [u32; 2]) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size[0],
        height: size[1],
        depth_or_array_layers: 1,
    }
}

fn region_fits(
    size: [u32; 2],
    origin: [u32; 2],
    region: [u32; 2],
    byte_len: usize,
) -> bool {
    let in_bounds = (0..2).all(|axis| {
        origin[axis]
            .checked_add(region[axis])
            .is_some_and(|end| end <= size[axis])
    });
    let expected = u64::from(region[0]) * u64::from(region[1]) * 4;
    in_bounds && region[0] > 0 && region[1] > 0 && expected == byte_len as u64
}

/// Create an RGBA8 UI color texture of `size` texels (clamped to at least
/// one texel per axis).
#[must_use]
pub fn create_color_texture(
    device: &wgpu::Device,
    label: &str,
    size: [u32; 2],
) -> ColorTexture {
    let size = [size[0].max(1), size[1].max(1)];
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: extent(size),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: UI_TEXTURE_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    ColorTexture {
        texture,
        view,
        size,
    }
}

/// Sampler descriptor for UI textures.
#[must_use]
pub fn ui_sampler_descriptor(
    options: &SamplerOptions,
) -> wgpu::SamplerDescriptor<'static> {
    let address_mode = options.address_mode.into();
    wgpu::SamplerDescriptor {
        label: Some("UI Sampler"),
        address_mode_u: address_mode,
        address_mode_v: address_mode,
        address_mode_w: address_mode,
        mag_filter: options.mag_filter.into(),
        min_filter: options.min_filter.into(),
        mipmap_filter: options.mipmap_filter.into(),
        ..Default::default()
    }
}

/// Create the filtering sampler bound at the UI set's sampler slot.
#[must_use]
pub fn create_ui_sampler(
    device: &wgpu::Device,
    options: &SamplerOptions,
) -> wgpu::Sampler {
    device.create_sampler(&ui_sampler_descriptor(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{AddressMode, Filter};

    #[test]
    fn default_sampler_matches_ui_defaults() {
        let desc = ui_sampler_descriptor(&SamplerOptions::default());
        assert_eq!(desc.mag_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.min_filter, wgpu::FilterMode::Nearest);
        assert_eq!(desc.mipmap_filter, wgpu::FilterMode::Nearest);
        assert_eq!(desc.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert_eq!(desc.address_mode_v, wgpu::AddressMode::ClampToEdge);
        assert!(desc.compare.is_none());
    }

    #[test]
    fn sampler_follows_options() {
        let opts = SamplerOptions {
            min_filter: Filter::Linear,
            address_mode: AddressMode::Repeat,
            ..SamplerOptions::default()
        };
        let desc = ui_sampler_descriptor(&opts);
        assert_eq!(desc.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.address_mode_w, wgpu::AddressMode::Repeat);
    }

    #[test]
    fn full_write_fits() {
        assert!(region_fits([4, 2], [0, 0], [4, 2], 32));
    }

    #[test]
    fn partial_write_at_offset_fits() {
        assert!(region_fits([8, 8], [6, 7], [2, 1], 8));
    }

    #[test]
    fn out_of_bounds_write_is_rejected() {
        assert!(!region_fits([8, 8], [7, 0], [2, 1], 8));
        assert!(!region_fits([8, 8], [u32::MAX, 0], [2, 1], 8));
    }

    #[test]
    fn wrong_byte_count_is_rejected() {
        assert!(!region_fits([4, 4], [0, 0], [2, 2], 15));
    }

    #[test]
    fn empty_region_is_rejected() {
        assert!(!region_fits([4, 4], [0, 0], [0, 2], 0));
    }
}
