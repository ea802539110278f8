// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU binding contracts for a wgpu voxel-editor renderer.
//!
//! Two binding sets connect the CPU to the shaders:
//!
//! - the **view set**: one uniform block at slot 0 holding the
//!   `view_matrix` and `projection_matrix` of the 3D scene pass,
//! - the **UI set**: a sampled 2D texture at slot 0, its sampler at slot 1
//!   and a `viewport_transform` vec4 at slot 2 for the UI overlay pass.
//!
//! # Key entry points
//!
//! - [`bindings`] - the registry both sides are generated from
//! - [`transform::ViewTransform`] / [`transform::ViewportTransform`] - the
//!   CPU values and their `#[repr(C)]` uniform layouts
//! - [`gpu::ViewBlock`] / [`gpu::UiBlock`] - wgpu owners of each set
//! - [`gpu::ShaderComposer`] - shader composition checked against the
//!   registry
//! - [`camera::Camera`] - fly camera producing view transforms
//! - [`options::Options`] - TOML configuration

pub mod bindings;
pub mod camera;
pub mod error;
pub mod gpu;
pub mod options;
pub mod transform;

pub use error::MulchError;
