//! Reflection check of compiled shader modules against the registry.
//!
//! The check walks the resource globals of a `naga::Module` that live in the
//! set's bind group and compares each against the registered slot. Slots the
//! shader does not use are fine; a resource at an unregistered slot, or one
//! whose type disagrees with the registry, is an error.

use std::fmt;

use super::{BindingEntry, BindingKind, BindingSetLayout, MemberType};

/// A shader declares a resource that disagrees with the binding registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The shader binds a resource at a slot the set does not define.
    UnknownSlot {
        /// Binding set label.
        set: &'static str,
        /// Bind group index.
        group: u32,
        /// Binding index found in the shader.
        slot: u32,
    },
    /// The resource kind at a slot differs from the registry.
    KindMismatch {
        /// Binding set label.
        set: &'static str,
        /// Binding index.
        slot: u32,
        /// Kind the registry expects.
        expected: &'static str,
        /// What the shader declares (naga type description).
        found: String,
    },
    /// A uniform block has a different total size.
    BlockSizeMismatch {
        /// Binding set label.
        set: &'static str,
        /// Binding index.
        slot: u32,
        /// Size from the registry, in bytes.
        expected: u64,
        /// Size declared by the shader, in bytes.
        found: u64,
    },
    /// A uniform block member is missing, reordered, or has the wrong type.
    MemberMismatch {
        /// Binding set label.
        set: &'static str,
        /// Binding index.
        slot: u32,
        /// Name of the registry member that failed to match.
        member: &'static str,
    },
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSlot { set, group, slot } => write!(
                f,
                "{set} set has no slot {slot} (shader binds @group({group}) @binding({slot}))"
            ),
            Self::KindMismatch {
                set,
                slot,
                expected,
                found,
            } => write!(
                f,
                "{set} slot {slot}: expected {expected}, shader declares {found}"
            ),
            Self::BlockSizeMismatch {
                set,
                slot,
                expected,
                found,
            } => write!(
                f,
                "{set} slot {slot}: uniform block is {found} bytes, expected {expected}"
            ),
            Self::MemberMismatch { set, slot, member } => write!(
                f,
                "{set} slot {slot}: member `{member}` missing or mistyped"
            ),
        }
    }
}

impl std::error::Error for BindingError {}

/// Compare every resource the module binds in `set.group` against `set`.
///
/// Returns the number of matched bindings.
///
/// # Errors
///
/// Returns the first [`BindingError`] found, in global declaration order.
pub fn check_module(
    set: &BindingSetLayout,
    module: &naga::Module,
) -> Result<usize, BindingError> {
    let mut matched = 0;
    for (_, var) in module.global_variables.iter() {
        let Some(binding) = var.binding.as_ref() else {
            continue;
        };
        if binding.group != set.group {
            continue;
        }
        let entry =
            set.entry(binding.binding)
                .ok_or(BindingError::UnknownSlot {
                    set: set.label,
                    group: binding.group,
                    slot: binding.binding,
                })?;
        check_entry(set, entry, var, module)?;
        matched += 1;
    }
    Ok(matched)
}

fn check_entry(
    set: &BindingSetLayout,
    entry: &BindingEntry,
    var: &naga::GlobalVariable,
    module: &naga::Module,
) -> Result<(), BindingError> {
    let inner = &module.types[var.ty].inner;
    let kind_mismatch = || BindingError::KindMismatch {
        set: set.label,
        slot: entry.slot,
        expected: entry.kind.describe(),
        found: format!("{:?} {inner:?}", var.space),
    };

    match entry.kind {
        BindingKind::Uniform { members, .. } => {
            let naga::TypeInner::Struct {
                members: found,
                span,
            } = inner
            else {
                return Err(kind_mismatch());
            };
            if var.space != naga::AddressSpace::Uniform {
                return Err(kind_mismatch());
            }
            let (offsets, size) =
                entry.member_offsets().ok_or_else(kind_mismatch)?;
            if u64::from(*span) != size {
                return Err(BindingError::BlockSizeMismatch {
                    set: set.label,
                    slot: entry.slot,
                    expected: size,
                    found: u64::from(*span),
                });
            }
            for (i, member) in members.iter().enumerate() {
                let ok = found.get(i).is_some_and(|f| {
                    u64::from(f.offset) == offsets[i]
                        && member_type_matches(
                            member.ty,
                            &module.types[f.ty].inner,
                        )
                });
                if !ok {
                    return Err(BindingError::MemberMismatch {
                        set: set.label,
                        slot: entry.slot,
                        member: member.name,
                    });
                }
            }
            Ok(())
        }
        BindingKind::Texture2d => match inner {
            naga::TypeInner::Image {
                dim: naga::ImageDimension::D2,
                arrayed: false,
                class:
                    naga::ImageClass::Sampled {
                        kind: naga::ScalarKind::Float,
                        multi: false,
                    },
            } => Ok(()),
            _ => Err(kind_mismatch()),
        },
        BindingKind::FilteringSampler => match inner {
            naga::TypeInner::Sampler { comparison: false } => Ok(()),
            _ => Err(kind_mismatch()),
        },
    }
}

fn member_type_matches(expected: MemberType, found: &naga::TypeInner) -> bool {
    match (expected, found) {
        (MemberType::Vec4, naga::TypeInner::Vector { size, scalar }) => {
            *size == naga::VectorSize::Quad && *scalar == naga::Scalar::F32
        }
        (
            MemberType::Mat4,
            naga::TypeInner::Matrix {
                columns,
                rows,
                scalar,
            },
        ) => {
            *columns == naga::VectorSize::Quad
                && *rows == naga::VectorSize::Quad
                && *scalar == naga::Scalar::F32
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{UI, VIEW};

    fn parse(src: &str) -> naga::Module {
        naga::front::wgsl::parse_str(src).unwrap()
    }

    #[test]
    fn swapped_ui_slots_are_reported() {
        let module = parse(
            "@group(0) @binding(0) var color_sampler: sampler;
             @group(0) @binding(1) var color_texture: texture_2d<f32>;",
        );
        let err = check_module(&UI, &module).unwrap_err();
        assert!(matches!(
            err,
            BindingError::KindMismatch {
                slot: 0,
                expected: "texture_2d<f32>",
                ..
            }
        ));
    }

    #[test]
    fn vec4_rows_in_place_of_view_matrix_are_reported() {
        // Same block size, but vec4s where the registry has a mat4.
        let module = parse(
            "struct ViewConstants {
                 a: vec4<f32>,
                 b: vec4<f32>,
                 c: vec4<f32>,
                 d: vec4<f32>,
                 projection_matrix: mat4x4<f32>,
             }
             @group(0) @binding(0) var<uniform> view_constants: ViewConstants;",
        );
        assert_eq!(
            check_module(&VIEW, &module),
            Err(BindingError::MemberMismatch {
                set: "View",
                slot: 0,
                member: "view_matrix",
            })
        );
    }

    #[test]
    fn oversized_view_block_is_reported() {
        let module = parse(
            "struct ViewConstants {
                 view_matrix: mat4x4<f32>,
                 projection_matrix: mat4x4<f32>,
                 eye: vec4<f32>,
             }
             @group(0) @binding(0) var<uniform> view_constants: ViewConstants;",
        );
        assert!(matches!(
            check_module(&VIEW, &module),
            Err(BindingError::BlockSizeMismatch {
                expected: 128,
                found: 144,
                ..
            })
        ));
    }

    #[test]
    fn mistyped_member_is_reported() {
        let module = parse(
            "struct ViewportConstants { viewport_transform: vec4<i32> }
             @group(0) @binding(2) var<uniform> viewport_constants: ViewportConstants;",
        );
        assert_eq!(
            check_module(&UI, &module),
            Err(BindingError::MemberMismatch {
                set: "UI",
                slot: 2,
                member: "viewport_transform",
            })
        );
    }

    #[test]
    fn unknown_slot_is_reported() {
        let module =
            parse("@group(0) @binding(5) var extra: texture_2d<f32>;");
        assert_eq!(
            check_module(&UI, &module),
            Err(BindingError::UnknownSlot {
                set: "UI",
                group: 0,
                slot: 5,
            })
        );
    }

    #[test]
    fn other_groups_and_partial_use_are_ignored() {
        let module = parse(
            "@group(1) @binding(7) var other: sampler;
             @group(0) @binding(1) var color_sampler: sampler;",
        );
        assert_eq!(check_module(&UI, &module), Ok(1));
    }

    #[test]
    fn storage_buffer_at_uniform_slot_is_reported() {
        let module = parse(
            "struct ViewportConstants { viewport_transform: vec4<f32> }
             @group(0) @binding(2) var<storage, read> viewport_constants: ViewportConstants;",
        );
        assert!(matches!(
            check_module(&UI, &module),
            Err(BindingError::KindMismatch { slot: 2, .. })
        ));
    }
}
