//! Scene assembly pass.
//!
//! Each call re-reads and re-decodes every referenced mesh from disk; the
//! core keeps no cache, so re-running with unchanged files yields an
//! identical scene.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use rigview_assets::{extract_all, load_gltf};
use rigview_urdf::Link;

use crate::types::{DrawableLink, DrawableScene};

/// Resolve a mesh reference against the description file's directory.
fn resolve(base_dir: &Path, reference: &str) -> PathBuf {
    let path = Path::new(reference);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Assemble a drawable scene from parsed links.
///
/// Links without a mesh reference are skipped with a warning; a mesh that
/// fails to load skips only its own link. Output order matches input order,
/// and within a link the primitive order matches the asset's stored order.
pub fn assemble(links: &[Link], base_dir: &Path) -> DrawableScene {
    let mut scene = Vec::new();

    for link in links {
        let Some(reference) = link.mesh.as_deref() else {
            warn!("Link '{}' has no mesh file, skipping", link.name);
            continue;
        };

        let path = resolve(base_dir, reference);
        let model = match load_gltf(&path) {
            Ok(model) => model,
            Err(e) => {
                warn!("Skipping link '{}': {}", link.name, e);
                continue;
            }
        };

        let primitives = extract_all(&model);
        info!(
            "Assembled link '{}': {} primitives",
            link.name,
            primitives.len()
        );

        scene.push(DrawableLink {
            name: link.name.clone(),
            transform: link.transform,
            primitives,
        });
    }

    info!("Scene assembly complete: {} drawable links", scene.len());
    scene
}
