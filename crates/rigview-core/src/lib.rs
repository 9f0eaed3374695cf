//! Rigview Core - Core types for the rigview viewer
//!
//! This crate provides the foundational types used throughout the viewer:
//! - Mathematical primitives (re-exported from glam)
//! - LinkTransform for positioning link geometry
//! - Common color type for flat-shaded rendering

pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use types::{Color, LinkTransform};
