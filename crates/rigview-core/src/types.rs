//! Core types used throughout the rigview viewer

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Transform applied to one link's geometry: uniform scale, an axis-angle
/// rotation, and a translation.
///
/// The rotation is stored as the description format carries it: an angle in
/// degrees plus an axis vector. Every field is always a well-defined finite
/// value; parsing failures fall back to the defaults below instead of
/// propagating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkTransform {
    /// Scale factor per axis. The description's single scalar is applied to
    /// all three axes.
    pub scale: Vec3,
    /// Translation offset.
    pub translation: Vec3,
    /// Rotation angle in degrees.
    pub rotation_angle: f32,
    /// Rotation axis. Does not need to be normalized.
    pub rotation_axis: Vec3,
}

impl Default for LinkTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            translation: Vec3::ZERO,
            rotation_angle: 0.0,
            rotation_axis: Vec3::Y,
        }
    }
}

impl LinkTransform {
    /// Create a transform with a uniform scale and everything else default
    pub fn from_uniform_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Default::default()
        }
    }

    /// Rotation as a quaternion. A degenerate (zero-length) axis falls back
    /// to +Y, which leaves a zero-angle rotation as the identity.
    pub fn rotation(&self) -> Quat {
        let axis = self.rotation_axis.try_normalize().unwrap_or(Vec3::Y);
        Quat::from_axis_angle(axis, self.rotation_angle.to_radians())
    }

    /// Compute the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation(), self.translation)
    }
}

/// RGBA color with floating point components (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    /// Create a color from RGB values (alpha = 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA values
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to an array [r, g, b, a]
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
