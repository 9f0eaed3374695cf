//! Rigview - a minimal robot-description viewer
//!
//! Parses the configured robot description, loads each referenced glTF
//! mesh, and assembles the drawable scene. The rendering backend is an
//! external collaborator; this binary prepares the scene and the uniforms
//! it consumes, and reports the draw sequence it would submit.

mod notify;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rigview_render::ViewerUniforms;
use rigview_scene::DrawableScene;
use rigview_urdf::{DescriptionError, Link};

use crate::notify::{notify, Severity};
use crate::settings::ViewerSettings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting rigview...");

    let settings = ViewerSettings::load();
    let description = settings.scene.description.clone();

    let links = load_links(&description);

    // Relative mesh references resolve against the description's directory.
    let base_dir = description
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let scene = rigview_scene::assemble(&links, &base_dir);

    let mut uniforms =
        ViewerUniforms::from_camera(&settings.camera, settings.render.aspect_ratio());
    uniforms.wireframe = settings.render.wireframe;
    uniforms.flat_color = settings.render.flat_color;

    report_draw_sequence(&scene, &uniforms);

    info!("Closing rigview.");
    Ok(())
}

/// Parse the robot description, surfacing failures to the user and
/// continuing with an empty link list. A bad description renders an empty
/// scene; it never aborts the process.
fn load_links(description: &Path) -> Vec<Link> {
    match rigview_urdf::parse_file(description) {
        Ok(links) => {
            notify(
                Severity::Info,
                "Robot description loaded",
                &format!("{} links from {}", links.len(), description.display()),
            );
            links
        }
        Err(e @ DescriptionError::MissingRoot) => {
            notify(Severity::Error, "Invalid robot description", &e.to_string());
            Vec::new()
        }
        Err(e) => {
            notify(
                Severity::Error,
                "Failed to load robot description",
                &e.to_string(),
            );
            Vec::new()
        }
    }
}

/// Log the draw sequence handed to the rendering collaborator.
fn report_draw_sequence(scene: &DrawableScene, uniforms: &ViewerUniforms) {
    for link in scene {
        info!(
            "Draw link '{}': {} primitives, {} triangles",
            link.name,
            link.primitives.len(),
            link.triangle_count()
        );
    }

    let total: usize = scene.iter().map(|link| link.triangle_count()).sum();
    info!(
        "Drawable scene ready: {} links, {} triangles (wireframe: {})",
        scene.len(),
        total,
        uniforms.wireframe
    );
}
