use std::path::Path;

use tracing::debug;

use crate::error::AssetError;

/// A decoded glTF asset: the parsed document plus its loaded buffer data.
///
/// Owned by a single load call and read-only afterwards; geometry extraction
/// borrows it and never mutates it.
pub struct GltfModel {
    pub document: gltf::Document,
    pub buffers: Vec<gltf::buffer::Data>,
}

/// Load and decode a glTF 2.0 file (.gltf or .glb).
pub fn load_gltf(path: &Path) -> Result<GltfModel, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let (document, buffers, _images) = gltf::import(path)
        .map_err(|e| AssetError::GltfLoadFailed(path.to_path_buf(), e.to_string()))?;

    debug!(
        "Loaded glTF '{}': {} meshes, {} buffers",
        path.display(),
        document.meshes().len(),
        buffers.len()
    );

    Ok(GltfModel { document, buffers })
}

impl GltfModel {
    /// Decode a glTF asset from an in-memory byte slice. External buffer
    /// references cannot be resolved this way; data-URI buffers work.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AssetError> {
        let (document, buffers, _images) = gltf::import_slice(bytes)
            .map_err(|e| AssetError::GltfLoadFailed("<memory>".into(), e.to_string()))?;
        Ok(Self { document, buffers })
    }
}
