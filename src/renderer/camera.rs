//! User-navigable orbit camera
//!
//! Only produces view/projection matrices; object transforms are untouched.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Closest and farthest allowed orbit distance
pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 100.0;
/// Pitch stays just short of the poles so `look_at` never degenerates
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Camera orbiting a target point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Rotation around the world Y axis (radians)
    pub yaw: f32,
    /// Elevation above the target's horizontal plane (radians)
    pub pitch: f32,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Looking down -Z from (0, 0, 5), 75 degree FOV
        Self {
            target: Vec3::ZERO,
            distance: 5.0,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: 75f32.to_radians(),
            aspect: 1.0,
        }
    }
}

impl OrbitCamera {
    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch) * self.distance
    }

    /// Orbit around the target
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Slide the target in the view plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        self.target += right * dx + up * dy;
    }

    /// Scale the orbit distance (factor < 1 moves closer)
    pub fn zoom(&mut self, factor: f32) {
        if factor > 0.0 {
            self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, 0.1, 1000.0)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye() {
        let cam = OrbitCamera::default();
        assert!(cam.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-6));
    }

    #[test]
    fn test_rotate_keeps_distance() {
        let mut cam = OrbitCamera::default();
        cam.rotate(1.0, 0.4);
        assert!(((cam.eye() - cam.target).length() - 5.0).abs() < 1e-4);

        cam.rotate(0.0, 10.0);
        assert!(cam.pitch <= MAX_PITCH);
    }

    #[test]
    fn test_pan_moves_target_and_eye_together() {
        let mut cam = OrbitCamera::default();
        let offset = cam.eye() - cam.target;
        cam.pan(1.0, 0.5);
        assert!(cam.target.abs_diff_eq(Vec3::new(1.0, 0.5, 0.0), 1e-5));
        assert!((cam.eye() - cam.target).abs_diff_eq(offset, 1e-5));
    }

    #[test]
    fn test_zoom_clamps() {
        let mut cam = OrbitCamera::default();
        cam.zoom(0.5);
        assert!((cam.distance - 2.5).abs() < 1e-6);
        cam.zoom(0.0001);
        assert_eq!(cam.distance, MIN_DISTANCE);
        cam.zoom(1e6);
        assert_eq!(cam.distance, MAX_DISTANCE);
        cam.zoom(-1.0);
        assert_eq!(cam.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_view_maps_target_in_front() {
        let cam = OrbitCamera::default();
        let p = cam.view().transform_point3(cam.target);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        assert!((p.z + 5.0).abs() < 1e-5);
    }
}
