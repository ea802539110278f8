use glam::{Mat4, Vec3, Vec4};

/// World-to-view and view-to-clip matrices for one view of one frame.
///
/// Shaders compose them as
/// `clip_position = projection_matrix * view_matrix * world_position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// World space to camera/view space.
    pub view_matrix: Mat4,
    /// View space to clip space.
    pub projection_matrix: Mat4,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// Both matrices identity.
    pub const IDENTITY: Self = Self {
        view_matrix: Mat4::IDENTITY,
        projection_matrix: Mat4::IDENTITY,
    };

    /// Build from a view and a projection matrix.
    #[must_use]
    pub const fn new(view_matrix: Mat4, projection_matrix: Mat4) -> Self {
        Self {
            view_matrix,
            projection_matrix,
        }
    }

    /// Combined `projection * view` matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Transform a world-space point into view space.
    #[must_use]
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        self.view_matrix.transform_point3(world)
    }

    /// Transform a world-space point into homogeneous clip space.
    #[must_use]
    pub fn to_clip(&self, world: Vec3) -> Vec4 {
        self.projection_matrix * (self.view_matrix * world.extend(1.0))
    }

    /// Back-project a normalized device coordinate (x, y in `[-1, 1]`,
    /// depth in `[0, 1]`) to world space.
    ///
    /// Returns `None` when either matrix is singular or the point lands at
    /// infinity.
    #[must_use]
    pub fn unproject(&self, ndc: Vec3) -> Option<Vec3> {
        if !self.is_invertible() {
            return None;
        }
        let world = self.view_projection().inverse() * ndc.extend(1.0);
        if world.w.abs() <= f32::EPSILON || !world.is_finite() {
            return None;
        }
        Some(world.truncate() / world.w)
    }

    /// Whether both matrices can be inverted, which depth and position
    /// recovery require.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        let invertible = |m: &Mat4| {
            let det = m.determinant();
            det.is_finite() && det != 0.0
        };
        invertible(&self.view_matrix) && invertible(&self.projection_matrix)
    }

    /// GPU layout of this transform.
    #[must_use]
    pub fn to_uniform(&self) -> ViewUniform {
        ViewUniform {
            view_matrix: self.view_matrix.to_cols_array_2d(),
            projection_matrix: self.projection_matrix.to_cols_array_2d(),
        }
    }
}

//
// WGSL layout (mulch::view):
//   view_matrix       : mat4x4<f32>   → 64 bytes
//   projection_matrix : mat4x4<f32>   → 64 bytes
// Total: 128 bytes
//

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block bound at the view set's slot 0.
pub struct ViewUniform {
    /// Column-major world-to-view matrix.
    pub view_matrix: [[f32; 4]; 4],
    /// Column-major view-to-clip matrix.
    pub projection_matrix: [[f32; 4]; 4],
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(size_of::<ViewUniform>() == 128);

impl Default for ViewUniform {
    fn default() -> Self {
        ViewTransform::IDENTITY.to_uniform()
    }
}
