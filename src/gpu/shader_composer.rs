use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::bindings::{check_module, BindingSetLayout, ALL_SETS, UI, VIEW};
use crate::error::MulchError;

/// A shader shipped with the crate and the binding set it declares.
#[derive(Debug, Clone, Copy)]
pub struct BundledShader {
    /// Path used in composer diagnostics.
    pub file_path: &'static str,
    /// WGSL source, with `#import` directives.
    pub source: &'static str,
    /// The one binding set the shader reads.
    pub set: &'static BindingSetLayout,
}

/// Every shader shipped with the crate.
pub const BUNDLED_SHADERS: &[BundledShader] = &[
    BundledShader {
        file_path: "scene.wgsl",
        source: include_str!("../../assets/shaders/scene.wgsl"),
        set: &VIEW,
    },
    BundledShader {
        file_path: "ui.wgsl",
        source: include_str!("../../assets/shaders/ui.wgsl"),
        set: &UI,
    },
];

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// The binding-set modules (`mulch::view`, `mulch::ui`) are generated from
/// the registry and registered at construction, so shaders never restate a
/// slot number. The composer produces `naga::Module` IR directly, skipping
/// WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

impl ShaderComposer {
    /// Composer with every registered binding set importable.
    ///
    /// # Errors
    ///
    /// Returns [`MulchError::ShaderCompose`] if a generated module fails to
    /// register.
    pub fn new() -> Result<Self, MulchError> {
        let mut composer = Composer::default();

        for set in ALL_SETS {
            let source = set.wgsl_module();
            let file_path = format!("{}.wgsl", set.import_path);
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: &source,
                    file_path: &file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    MulchError::ShaderCompose(format!(
                        "module '{}': {e}",
                        set.import_path
                    ))
                })?;
            log::debug!("registered shader module {}", set.import_path);
        }

        Ok(Self { composer })
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu
    /// shader module.
    ///
    /// # Errors
    ///
    /// Returns [`MulchError::ShaderCompose`] if composition fails.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, MulchError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| MulchError::ShaderCompose(format!("'{file_path}': {e}")))
    }

    /// Compose a shader and check its resources against `set`.
    ///
    /// # Errors
    ///
    /// Returns [`MulchError::ShaderCompose`] if composition fails and
    /// [`MulchError::Binding`] if the shader disagrees with the registry.
    pub fn compose_checked(
        &mut self,
        set: &BindingSetLayout,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, MulchError> {
        let module = self.compose_naga(source, file_path)?;
        let checked = check_module(set, &module)?;
        log::debug!(
            "{file_path}: {checked} resource(s) match the {} set",
            set.label
        );
        Ok(module)
    }

    /// Compose and check every bundled shader. Returns how many passed.
    ///
    /// # Errors
    ///
    /// Stops at the first shader that fails to compose or check.
    pub fn check_bundled(&mut self) -> Result<usize, MulchError> {
        for shader in BUNDLED_SHADERS {
            let _ = self.compose_checked(
                shader.set,
                shader.source,
                shader.file_path,
            )?;
        }
        Ok(BUNDLED_SHADERS.len())
    }

    /// Compose and check a shader against `set`, then create a
    /// `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// See [`compose_checked`](Self::compose_checked).
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        set: &BindingSetLayout,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, MulchError> {
        let naga_module = self.compose_checked(set, source, file_path)?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::BindingError;

    #[test]
    fn bundled_shaders_compose_and_match_registry() {
        let mut composer = ShaderComposer::new().unwrap();
        assert_eq!(composer.check_bundled().unwrap(), BUNDLED_SHADERS.len());
    }

    #[test]
    fn bundled_shaders_validate() {
        let mut composer = ShaderComposer::new().unwrap();
        for shader in BUNDLED_SHADERS {
            let module = composer
                .compose_naga(shader.source, shader.file_path)
                .unwrap();
            let _ = naga::valid::Validator::new(
                naga::valid::ValidationFlags::all(),
                naga::valid::Capabilities::all(),
            )
            .validate(&module)
            .unwrap_or_else(|e| {
                panic!("{} failed validation: {e:?}", shader.file_path)
            });
        }
    }

    #[test]
    fn ui_shader_against_view_set_is_rejected() {
        let mut composer = ShaderComposer::new().unwrap();
        let ui = &BUNDLED_SHADERS[1];
        let err = composer
            .compose_checked(&VIEW, ui.source, ui.file_path)
            .unwrap_err();
        assert!(matches!(err, MulchError::Binding(_)));
    }

    #[test]
    fn hand_declared_wrong_slot_is_rejected() {
        let source = "
#import mulch::ui::ui_to_clip

@group(0) @binding(5) var extra: sampler;

@vertex
fn vs_main(@location(0) p: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(ui_to_clip(p), 0.0, 1.0);
}
";
        let mut composer = ShaderComposer::new().unwrap();
        let err = composer
            .compose_checked(&UI, source, "extra.wgsl")
            .unwrap_err();
        assert!(matches!(
            err,
            MulchError::Binding(BindingError::UnknownSlot { slot: 5, .. })
        ));
    }

    #[test]
    fn unknown_import_is_a_compose_error() {
        let source = "
#import mulch::missing::thing

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(thing());
}
";
        let mut composer = ShaderComposer::new().unwrap();
        let err = composer.compose_naga(source, "missing.wgsl").unwrap_err();
        assert!(matches!(err, MulchError::ShaderCompose(_)));
    }
}
