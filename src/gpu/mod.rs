//! wgpu-side owners of the binding sets.
//!
//! - [`ViewBlock`]: the `VIEW` layout plus one uniform buffer per view per
//!   frame ([`UniformRing`]).
//! - [`UiBlock`]: the `UI` layout plus the shared viewport buffer;
//!   [`UiDrawBinding`] supplies the texture and sampler per draw.
//! - [`ShaderComposer`]: `naga_oil` composer with the registry's WGSL
//!   modules importable, checking composed shaders against the registry.

/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
pub mod texture;
pub mod ui_block;
pub mod uniform_ring;
pub mod view_block;

pub use shader_composer::{BundledShader, ShaderComposer, BUNDLED_SHADERS};
pub use texture::{
    create_color_texture, create_ui_sampler, ColorTexture, UI_TEXTURE_FORMAT,
};
pub use ui_block::{UiBlock, UiDrawBinding, ViewportTracker};
pub use uniform_ring::{UniformRing, UniformSlot};
pub use view_block::{ViewBlock, ViewSlot};
