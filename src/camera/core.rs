use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::options::CameraOptions;
use crate::transform::ViewTransform;

/// Pitch is kept just short of straight up/down so the Z-up look direction
/// never degenerates.
const MAX_PITCH: f32 = 89.0_f32 * std::f32::consts::PI / 180.0;

/// Free-flying perspective camera (right-handed, Z-up, XY = ground).
///
/// At zero yaw and pitch the camera looks along +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Rotation about the camera's right axis, in radians.
    pub pitch: f32,
    /// Rotation about world +Z, in radians.
    pub yaw: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Camera {
    /// Camera placed and configured from options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            position: Vec3::from_array(options.position),
            pitch: options.pitch.to_radians(),
            yaw: options.yaw.to_radians(),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Unit look direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Mat3::from_rotation_z(self.yaw) * Mat3::from_rotation_x(self.pitch) * Vec3::Y
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Z)
    }

    /// View-to-clip matrix for the given aspect ratio (width / height).
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu convention)
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }

    /// Both matrices for one view of one frame.
    #[must_use]
    pub fn compute_matrices(&self, aspect: f32) -> ViewTransform {
        ViewTransform::new(self.view_matrix(), self.projection_matrix(aspect))
    }

    /// Move by `offset` expressed in the camera's own frame
    /// (x = right, y = up, z = backward).
    pub fn translate_local_frame(&mut self, offset: Vec3) {
        let view = Mat3::from_mat4(self.view_matrix());
        self.position += view.transpose() * offset;
    }

    /// Rotate in place by pitch/yaw deltas (radians). Pitch is clamped to
    /// ±89°.
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw += delta_yaw;
    }

    /// Rotate around the point `distance` units ahead of the camera, keeping
    /// that point fixed on screen.
    pub fn orbit(&mut self, delta_pitch: f32, delta_yaw: f32, distance: f32) {
        let pivot = self.position + self.forward() * distance;
        self.rotate(delta_pitch, delta_yaw);
        self.position = pivot - self.forward() * distance;
    }

    /// Intersect the ray through a normalized viewport position
    /// (`[-1, 1]`, +Y up) with the ground plane `z = 0`.
    ///
    /// Returns `None` when the ray points away from the plane.
    #[must_use]
    pub fn ground_point(&self, ndc: Vec2, aspect: f32) -> Option<Vec3> {
        let transform = self.compute_matrices(aspect);
        let far = transform.unproject(ndc.extend(1.0))?;
        let direction = far - self.position;
        if direction.z * self.position.z >= 0.0 {
            return None;
        }
        let t = -self.position.z / direction.z;
        Some(self.position + direction * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_maps_to_view_origin() {
        let camera = Camera::default();
        let t = camera.compute_matrices(16.0 / 9.0);
        assert!(t.to_view(camera.position).length() < 1e-5);
        assert!(t.is_invertible());
    }

    #[test]
    fn zero_angles_look_along_y() {
        let camera = Camera {
            position: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            ..Camera::default()
        };
        assert!((camera.forward() - Vec3::Y).length() < 1e-6);
        // Looking down -Z in view space.
        let ahead = camera.compute_matrices(1.0).to_view(Vec3::Y * 5.0);
        assert!((ahead - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
    }

    #[test]
    fn local_translation_moves_backward_along_view() {
        let mut camera = Camera::default();
        let start = camera.position;
        let forward = camera.forward();
        camera.translate_local_frame(Vec3::new(0.0, 0.0, 2.0));
        assert!((camera.position - (start - forward * 2.0)).length() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.rotate(10.0, 0.0);
        assert!(camera.pitch <= MAX_PITCH);
        camera.rotate(-20.0, 0.0);
        assert!(camera.pitch >= -MAX_PITCH);
    }

    #[test]
    fn orbit_keeps_pivot() {
        let mut camera = Camera::default();
        let pivot = camera.position + camera.forward() * 8.0;
        camera.orbit(-0.1, 0.3, 8.0);
        let after = camera.position + camera.forward() * 8.0;
        assert!((after - pivot).length() < 1e-4);
    }

    #[test]
    fn ground_point_under_screen_center() {
        let camera = Camera {
            position: Vec3::new(0.0, 0.0, 10.0),
            pitch: -MAX_PITCH,
            yaw: 0.0,
            ..Camera::default()
        };
        let hit = camera.ground_point(Vec2::ZERO, 1.0).unwrap();
        assert!(hit.z.abs() < 1e-3);
        assert!(hit.truncate().length() < 0.5);

        let looking_up = Camera {
            pitch: MAX_PITCH,
            ..camera
        };
        assert_eq!(looking_up.ground_point(Vec2::ZERO, 1.0), None);
    }
}
