use rigview_core::LinkTransform;

/// One link of the described robot: a name, an optional mesh reference, and
/// the transform to apply to that mesh.
///
/// Links are immutable once parsed. A link without a mesh reference is kept
/// in the list (it preserves ordering and shows up in diagnostics) but is
/// skipped during scene assembly.
#[derive(Debug, Clone)]
pub struct Link {
    /// Link name. Empty if the `name` attribute was absent.
    pub name: String,
    /// Path to the link's mesh asset, relative or absolute.
    pub mesh: Option<String>,
    /// Transform applied to the mesh when drawing.
    pub transform: LinkTransform,
}

impl Link {
    /// Create a link with the given name and no mesh.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
            transform: LinkTransform::default(),
        }
    }
}
