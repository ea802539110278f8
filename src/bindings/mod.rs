//! Central binding-layout registry.
//!
//! Every binding set a shader stage may declare is described once here, as a
//! [`BindingSetLayout`] constant. The same description drives:
//!
//! - the wgpu bind-group layout used by the CPU-side uploader
//!   ([`BindingSetLayout::layout_entries`]),
//! - the WGSL declarations shaders import ([`BindingSetLayout::wgsl_module`]),
//! - the reflection check that compares a compiled shader against the layout
//!   ([`check_module`]).
//!
//! Two sets exist: [`VIEW`] for the 3D scene pass and [`UI`] for the UI
//! overlay pass. A shader stage declares at most one of them.

mod layout;
mod reflect;
mod wgsl;

pub use layout::{filtering_sampler, texture_2d, uniform_buffer};
pub use reflect::{check_module, BindingError};

/// Slot of the view/projection uniform block in [`VIEW`].
pub const VIEW_CONSTANTS_SLOT: u32 = 0;
/// Slot of the sampled color texture in [`UI`].
pub const UI_TEXTURE_SLOT: u32 = 0;
/// Slot of the color sampler in [`UI`].
pub const UI_SAMPLER_SLOT: u32 = 1;
/// Slot of the viewport transform uniform block in [`UI`].
pub const UI_VIEWPORT_SLOT: u32 = 2;

/// Type of one member of a uniform block.
///
/// All members are 16-byte aligned, so the CPU `#[repr(C)]` struct and the
/// WGSL uniform layout agree without explicit padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberType {
    /// `vec4<f32>`
    Vec4,
    /// `mat4x4<f32>`, column-major.
    Mat4,
}

impl MemberType {
    /// Size in bytes inside a uniform block.
    #[must_use]
    pub const fn size(self) -> u64 {
        match self {
            Self::Vec4 => 16,
            Self::Mat4 => 64,
        }
    }

    /// Alignment in bytes inside a uniform block.
    #[must_use]
    pub const fn align(self) -> u64 {
        16
    }

    /// WGSL spelling of the type.
    #[must_use]
    pub const fn wgsl(self) -> &'static str {
        match self {
            Self::Vec4 => "vec4<f32>",
            Self::Mat4 => "mat4x4<f32>",
        }
    }
}

/// One named member of a uniform block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformMember {
    /// Member name as declared in WGSL.
    pub name: &'static str,
    /// Member type.
    pub ty: MemberType,
}

/// The kind of resource bound at a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// A uniform buffer holding a struct with the given members, in order.
    Uniform {
        /// WGSL struct name.
        struct_name: &'static str,
        /// Members in declaration order.
        members: &'static [UniformMember],
    },
    /// A filterable float 2D texture (image data only).
    Texture2d,
    /// A filtering sampler (sampling state only).
    FilteringSampler,
}

impl BindingKind {
    /// Short human-readable name, used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Uniform { .. } => "uniform block",
            Self::Texture2d => "texture_2d<f32>",
            Self::FilteringSampler => "sampler",
        }
    }
}

/// One slot of a binding set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingEntry {
    /// Binding index within the set.
    pub slot: u32,
    /// WGSL variable name.
    pub name: &'static str,
    /// What is bound here.
    pub kind: BindingKind,
}

impl BindingEntry {
    /// Byte offsets of each uniform member, followed by the total block size.
    ///
    /// Returns `None` for non-uniform slots.
    #[must_use]
    pub fn member_offsets(&self) -> Option<(Vec<u64>, u64)> {
        let BindingKind::Uniform { members, .. } = self.kind else {
            return None;
        };
        let mut offsets = Vec::with_capacity(members.len());
        let mut cursor = 0u64;
        for member in members {
            cursor = cursor.next_multiple_of(member.ty.align());
            offsets.push(cursor);
            cursor += member.ty.size();
        }
        // Uniform structs round up to 16 bytes.
        Some((offsets, cursor.next_multiple_of(16)))
    }

    /// Size of the uniform block in bytes, or `None` for non-uniform slots.
    #[must_use]
    pub fn block_size(&self) -> Option<u64> {
        self.member_offsets().map(|(_, size)| size)
    }
}

/// Description of one binding set: its group index, stage visibility, and
/// slots.
#[derive(Debug, Clone, Copy)]
pub struct BindingSetLayout {
    /// Label used for wgpu objects and messages.
    pub label: &'static str,
    /// `naga_oil` import path of the generated WGSL module.
    pub import_path: &'static str,
    /// Bind group index the set occupies in pipelines that use it.
    pub group: u32,
    /// Shader stages that may read the set.
    pub visibility: wgpu::ShaderStages,
    /// Slots, in ascending order.
    pub entries: &'static [BindingEntry],
    /// WGSL helper functions appended after the declarations.
    pub helpers: &'static str,
}

impl BindingSetLayout {
    /// Look up a slot by binding index.
    #[must_use]
    pub fn entry(&self, slot: u32) -> Option<&BindingEntry> {
        self.entries.iter().find(|e| e.slot == slot)
    }
}

const VIEW_MEMBERS: &[UniformMember] = &[
    UniformMember {
        name: "view_matrix",
        ty: MemberType::Mat4,
    },
    UniformMember {
        name: "projection_matrix",
        ty: MemberType::Mat4,
    },
];

const VIEWPORT_MEMBERS: &[UniformMember] = &[UniformMember {
    name: "viewport_transform",
    ty: MemberType::Vec4,
}];

/// View/projection binding set for the 3D scene pass.
pub const VIEW: BindingSetLayout = BindingSetLayout {
    label: "View",
    import_path: "mulch::view",
    group: 0,
    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
    entries: &[BindingEntry {
        slot: VIEW_CONSTANTS_SLOT,
        name: "view_constants",
        kind: BindingKind::Uniform {
            struct_name: "ViewConstants",
            members: VIEW_MEMBERS,
        },
    }],
    helpers: "
fn world_to_view(world_position: vec3<f32>) -> vec4<f32> {
    return view_constants.view_matrix * vec4<f32>(world_position, 1.0);
}

fn world_to_clip(world_position: vec3<f32>) -> vec4<f32> {
    return view_constants.projection_matrix * world_to_view(world_position);
}
",
};

/// UI overlay binding set: color texture, sampler, and viewport transform.
pub const UI: BindingSetLayout = BindingSetLayout {
    label: "UI",
    import_path: "mulch::ui",
    group: 0,
    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
    entries: &[
        BindingEntry {
            slot: UI_TEXTURE_SLOT,
            name: "color_texture",
            kind: BindingKind::Texture2d,
        },
        BindingEntry {
            slot: UI_SAMPLER_SLOT,
            name: "color_sampler",
            kind: BindingKind::FilteringSampler,
        },
        BindingEntry {
            slot: UI_VIEWPORT_SLOT,
            name: "viewport_constants",
            kind: BindingKind::Uniform {
                struct_name: "ViewportConstants",
                members: VIEWPORT_MEMBERS,
            },
        },
    ],
    helpers: "
// xy: scale, zw: offset
fn ui_to_clip(ui_position: vec2<f32>) -> vec2<f32> {
    let t = viewport_constants.viewport_transform;
    return ui_position * t.xy + t.zw;
}
",
};

/// Every registered binding set.
pub const ALL_SETS: [&BindingSetLayout; 2] = [&VIEW, &UI];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{ViewUniform, ViewportUniform};

    #[test]
    fn view_block_matches_cpu_struct() {
        let entry = VIEW.entry(VIEW_CONSTANTS_SLOT).unwrap();
        let (offsets, size) = entry.member_offsets().unwrap();
        assert_eq!(offsets, vec![0, 64]);
        assert_eq!(size, size_of::<ViewUniform>() as u64);
    }

    #[test]
    fn viewport_block_matches_cpu_struct() {
        let entry = UI.entry(UI_VIEWPORT_SLOT).unwrap();
        assert_eq!(entry.block_size(), Some(size_of::<ViewportUniform>() as u64));
    }

    #[test]
    fn ui_slots_are_split_texture_sampler_uniform() {
        let kinds: Vec<_> = UI.entries.iter().map(|e| (e.slot, e.kind.describe())).collect();
        assert_eq!(
            kinds,
            vec![(0, "texture_2d<f32>"), (1, "sampler"), (2, "uniform block")]
        );
        assert!(UI.entry(3).is_none());
    }

    #[test]
    fn non_uniform_slots_have_no_block_size() {
        assert_eq!(UI.entry(UI_TEXTURE_SLOT).unwrap().block_size(), None);
        assert_eq!(UI.entry(UI_SAMPLER_SLOT).unwrap().block_size(), None);
    }
}
