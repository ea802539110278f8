use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Texture filtering mode.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Nearest texel.
    #[default]
    Nearest,
    /// Bilinear blend of neighbouring texels.
    Linear,
}

impl From<Filter> for wgpu::FilterMode {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => Self::Nearest,
            Filter::Linear => Self::Linear,
        }
    }
}

/// Texture addressing outside `[0, 1]`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AddressMode {
    /// Clamp to the edge texel.
    #[default]
    ClampToEdge,
    /// Tile the texture.
    Repeat,
    /// Tile, flipping every other repetition.
    MirrorRepeat,
}

impl From<AddressMode> for wgpu::AddressMode {
    fn from(mode: AddressMode) -> Self {
        match mode {
            AddressMode::ClampToEdge => Self::ClampToEdge,
            AddressMode::Repeat => Self::Repeat,
            AddressMode::MirrorRepeat => Self::MirrorRepeat,
        }
    }
}

/// Sampling state for UI textures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Sampler", inline)]
#[serde(default)]
pub struct SamplerOptions {
    /// Magnification filter.
    #[schemars(title = "Magnification")]
    pub mag_filter: Filter,
    /// Minification filter.
    #[schemars(title = "Minification")]
    pub min_filter: Filter,
    /// Mipmap filter.
    #[schemars(skip)]
    pub mipmap_filter: Filter,
    /// Addressing on all axes.
    #[schemars(skip)]
    pub address_mode: AddressMode,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            mag_filter: Filter::Linear,
            min_filter: Filter::Nearest,
            mipmap_filter: Filter::Nearest,
            address_mode: AddressMode::ClampToEdge,
        }
    }
}

/// UI overlay parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "UI", inline)]
#[serde(default)]
pub struct UiOptions {
    /// Physical pixels per logical point (UI zoom).
    #[schemars(title = "UI Scale", range(min = 0.5, max = 4.0), extend("step" = 0.05))]
    pub pixels_per_point: f32,
    /// Sampler used for UI textures.
    pub sampler: SamplerOptions,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            // 10% zoom over native by default
            pixels_per_point: 1.1,
            sampler: SamplerOptions::default(),
        }
    }
}
