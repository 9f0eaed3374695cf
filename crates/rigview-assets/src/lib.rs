//! Rigview Assets - glTF mesh loading and geometry extraction
//!
//! Provides decoding of glTF 2.0 mesh files and extraction of flat
//! triangle-list geometry for the viewer. Materials, textures, skinning,
//! and the node hierarchy are not read.

mod error;
mod geometry;
mod gltf_loader;

pub use error::AssetError;
pub use geometry::{extract_all, extract_primitive, TriangleList};
pub use gltf_loader::{load_gltf, GltfModel};
