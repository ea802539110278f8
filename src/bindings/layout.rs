//! wgpu bind-group layout entries derived from the registry.

use std::num::NonZeroU64;

use super::{BindingKind, BindingSetLayout};

/// Filterable float 2D texture binding.
#[must_use]
pub fn texture_2d(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

/// Filtering sampler binding.
#[must_use]
pub fn filtering_sampler(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

/// Uniform buffer binding with an optional minimum size.
#[must_use]
pub fn uniform_buffer(
    binding: u32,
    visibility: wgpu::ShaderStages,
    min_binding_size: Option<NonZeroU64>,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size,
        },
        count: None,
    }
}

impl BindingSetLayout {
    /// Layout entries for every slot of the set.
    ///
    /// Uniform slots carry their block size as `min_binding_size`, so a
    /// buffer smaller than the declared block is rejected at bind-group
    /// creation rather than read out of bounds.
    #[must_use]
    pub fn layout_entries(&self) -> Vec<wgpu::BindGroupLayoutEntry> {
        self.entries
            .iter()
            .map(|entry| match entry.kind {
                BindingKind::Uniform { .. } => uniform_buffer(
                    entry.slot,
                    self.visibility,
                    entry.block_size().and_then(NonZeroU64::new),
                ),
                BindingKind::Texture2d => {
                    texture_2d(entry.slot, self.visibility)
                }
                BindingKind::FilteringSampler => {
                    filtering_sampler(entry.slot, self.visibility)
                }
            })
            .collect()
    }

    /// Create the wgpu bind-group layout for this set.
    #[must_use]
    pub fn create_bind_group_layout(
        &self,
        device: &wgpu::Device,
    ) -> wgpu::BindGroupLayout {
        let entries = self.layout_entries();
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{} Bind Group Layout", self.label)),
            entries: &entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::bindings::{UI, VIEW};

    #[test]
    fn view_layout_is_one_sized_uniform() {
        let entries = VIEW.layout_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].binding, 0);
        assert!(matches!(
            entries[0].ty,
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(size),
            } if size.get() == 128
        ));
    }

    #[test]
    fn ui_layout_orders_texture_sampler_uniform() {
        let entries = UI.layout_entries();
        let bindings: Vec<u32> = entries.iter().map(|e| e.binding).collect();
        assert_eq!(bindings, vec![0, 1, 2]);
        assert!(matches!(entries[0].ty, wgpu::BindingType::Texture { .. }));
        assert!(matches!(
            entries[1].ty,
            wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering)
        ));
        assert!(matches!(
            entries[2].ty,
            wgpu::BindingType::Buffer {
                min_binding_size: Some(size),
                ..
            } if size.get() == 16
        ));
        for entry in &entries {
            assert_eq!(entry.visibility, wgpu::ShaderStages::VERTEX_FRAGMENT);
        }
    }
}
