//! Rigview Render - Renderer-facing data contract
//!
//! The rendering backend itself lives outside this workspace; these are the
//! camera and scene-wide uniform types handed to it alongside the drawable
//! scene.

mod camera;
mod scene;

pub use camera::CameraConfig;
pub use scene::ViewerUniforms;
