//! Fixed viewer camera

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera parameters for the viewer's fixed look-at camera.
///
/// The defaults frame a robot model whose meshes use millimeter-scale
/// coordinates, looking from high above the first octant toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Near clip plane distance.
    pub z_near: f32,
    /// Far clip plane distance.
    pub z_far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(65000.0, 11000.0, 10000.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45.0,
            z_near: 0.1,
            z_far: 250_000.0,
        }
    }
}

impl CameraConfig {
    /// View matrix for this camera.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), aspect, self.z_near, self.z_far)
    }
}
