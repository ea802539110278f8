//! WGSL generation from the registry.

use super::{BindingKind, BindingSetLayout};

impl BindingSetLayout {
    /// WGSL struct and resource declarations for the set, followed by its
    /// helper functions. Plain WGSL, parseable on its own.
    #[must_use]
    pub fn wgsl_declarations(&self) -> String {
        let mut out = String::new();

        for entry in self.entries {
            if let BindingKind::Uniform {
                struct_name,
                members,
            } = entry.kind
            {
                out.push_str(&format!("struct {struct_name} {{\n"));
                for member in members {
                    out.push_str(&format!(
                        "    {}: {},\n",
                        member.name,
                        member.ty.wgsl()
                    ));
                }
                out.push_str("}\n\n");
            }
        }

        for entry in self.entries {
            let prefix =
                format!("@group({}) @binding({})", self.group, entry.slot);
            let decl = match entry.kind {
                BindingKind::Uniform { struct_name, .. } => format!(
                    "{prefix} var<uniform> {}: {struct_name};",
                    entry.name
                ),
                BindingKind::Texture2d => {
                    format!("{prefix} var {}: texture_2d<f32>;", entry.name)
                }
                BindingKind::FilteringSampler => {
                    format!("{prefix} var {}: sampler;", entry.name)
                }
            };
            out.push_str(&decl);
            out.push('\n');
        }

        out.push_str(self.helpers);
        out
    }

    /// Composable `naga_oil` module: the declarations under the set's
    /// `#define_import_path`.
    #[must_use]
    pub fn wgsl_module(&self) -> String {
        format!(
            "#define_import_path {}\n\n{}",
            self.import_path,
            self.wgsl_declarations()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::bindings::{ALL_SETS, UI, VIEW};

    #[test]
    fn view_declarations_keep_matrix_order() {
        let src = VIEW.wgsl_declarations();
        let view = src.find("view_matrix: mat4x4<f32>").unwrap();
        let proj = src.find("projection_matrix: mat4x4<f32>").unwrap();
        assert!(view < proj);
        assert!(src.contains(
            "@group(0) @binding(0) var<uniform> view_constants: ViewConstants;"
        ));
    }

    #[test]
    fn ui_declarations_cover_all_slots() {
        let src = UI.wgsl_declarations();
        assert!(src.contains("@group(0) @binding(0) var color_texture: texture_2d<f32>;"));
        assert!(src.contains("@group(0) @binding(1) var color_sampler: sampler;"));
        assert!(src.contains(
            "@group(0) @binding(2) var<uniform> viewport_constants: ViewportConstants;"
        ));
    }

    #[test]
    fn generated_declarations_parse_and_validate() {
        for set in ALL_SETS {
            let src = set.wgsl_declarations();
            let module = naga::front::wgsl::parse_str(&src)
                .unwrap_or_else(|e| panic!("{} failed to parse: {e}", set.label));
            let mut validator = naga::valid::Validator::new(
                naga::valid::ValidationFlags::all(),
                naga::valid::Capabilities::default(),
            );
            let _ = validator.validate(&module).unwrap();
            assert_eq!(crate::bindings::check_module(set, &module).unwrap(), set.entries.len());
        }
    }

    #[test]
    fn module_starts_with_import_path() {
        assert!(VIEW.wgsl_module().starts_with("#define_import_path mulch::view\n"));
        assert!(UI.wgsl_module().starts_with("#define_import_path mulch::ui\n"));
    }
}
