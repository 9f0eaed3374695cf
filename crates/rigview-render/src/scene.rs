//! Scene-wide uniforms handed to the rendering collaborator

use glam::Mat4;
use serde::{Deserialize, Serialize};

use rigview_core::Color;

use crate::camera::CameraConfig;

/// Scene-wide uniforms for one render pass: camera matrices plus the fixed
/// flat-shading options the viewer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerUniforms {
    /// View matrix (camera).
    pub view: Mat4,
    /// Projection matrix.
    pub projection: Mat4,
    /// Flat color applied to all geometry (no materials, no lighting).
    pub flat_color: Color,
    /// Draw polygons as wireframe outlines.
    pub wireframe: bool,
}

impl Default for ViewerUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            flat_color: Color::RED,
            wireframe: true,
        }
    }
}

impl ViewerUniforms {
    /// Build uniforms from a camera configuration and viewport aspect ratio.
    pub fn from_camera(camera: &CameraConfig, aspect: f32) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(aspect),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_camera_fills_matrices() {
        let camera = CameraConfig::default();
        let uniforms = ViewerUniforms::from_camera(&camera, 1.0);
        assert_eq!(uniforms.view, camera.view_matrix());
        assert_eq!(uniforms.projection, camera.projection_matrix(1.0));
        assert_eq!(uniforms.flat_color, Color::RED);
        assert!(uniforms.wireframe);
    }
}
