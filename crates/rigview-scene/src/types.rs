use rigview_assets::TriangleList;
use rigview_core::LinkTransform;

/// One link ready for drawing: its transform and the triangle lists
/// extracted from its mesh, one per primitive in the asset's stored order.
#[derive(Debug, Clone)]
pub struct DrawableLink {
    pub name: String,
    pub transform: LinkTransform,
    pub primitives: Vec<TriangleList>,
}

impl DrawableLink {
    /// Total number of triangles across all primitives.
    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(TriangleList::triangle_count).sum()
    }
}

/// The assembled scene: drawable links in description order.
pub type DrawableScene = Vec<DrawableLink>;
