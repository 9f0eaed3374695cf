//! Triangle-list geometry extraction.
//!
//! Walks a decoded model's meshes and primitives and resolves each
//! triangle-list primitive's index accessor against its POSITION accessor,
//! producing a flat point sequence in draw order. Index values are read at
//! the width declared by the accessor's component type and widened to u32.

use glam::Vec3;
use tracing::warn;

use crate::gltf_loader::GltfModel;

/// Flat triangle-list geometry for one primitive: one point per index, in
/// draw order. Three consecutive points form one triangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleList {
    pub points: Vec<Vec3>,
}

impl TriangleList {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of complete triangles in the list.
    pub fn triangle_count(&self) -> usize {
        self.points.len() / 3
    }
}

/// Extract draw-order positions from a single primitive.
///
/// Returns an empty list when the primitive's topology is not a triangle
/// list, when it has no index accessor, or when no POSITION attribute is
/// bound. An index outside the position accessor's range drops the whole
/// primitive rather than reading out of bounds.
pub fn extract_primitive(model: &GltfModel, primitive: &gltf::Primitive) -> TriangleList {
    if primitive.mode() != gltf::mesh::Mode::Triangles {
        return TriangleList::default();
    }

    let reader = primitive.reader(|buffer| Some(&model.buffers[buffer.index()]));

    let Some(indices) = reader.read_indices() else {
        return TriangleList::default();
    };
    let Some(positions) = reader.read_positions() else {
        return TriangleList::default();
    };

    let positions: Vec<[f32; 3]> = positions.collect();
    let mut points = Vec::new();

    for index in indices.into_u32() {
        match positions.get(index as usize) {
            Some(&position) => points.push(Vec3::from(position)),
            None => {
                warn!(
                    "Primitive index {} out of range ({} positions), dropping primitive",
                    index,
                    positions.len()
                );
                return TriangleList::default();
            }
        }
    }

    TriangleList { points }
}

/// Extract every triangle-list primitive in the model, meshes then
/// primitives in stored order. Primitives that contribute no geometry are
/// skipped; the rest stay separate (one entry per draw call, never merged).
pub fn extract_all(model: &GltfModel) -> Vec<TriangleList> {
    let mut lists = Vec::new();

    for mesh in model.document.meshes() {
        for primitive in mesh.primitives() {
            let list = extract_primitive(model, &primitive);
            if !list.is_empty() {
                lists.push(list);
            }
        }
    }

    lists
}

#[cfg(test)]
mod tests {
    use super::*;

    // 6 bytes of u16 indices, 2 bytes padding, then 3 vec3 f32 positions:
    // (0,0,0), (1,0,0), (0,1,0).
    const TRIANGLE_B64: &str = "AAABAAIAAAAAAAAAAAAAAAAAAAAAAIA/AAAAAAAAAAAAAAAAAACAPwAAAAA=";
    // Same layout, but the third index is 7 (out of range).
    const OUT_OF_RANGE_B64: &str =
        "AAABAAcAAAAAAAAAAAAAAAAAAAAAAIA/AAAAAAAAAAAAAAAAAACAPwAAAAA=";

    /// Build a single-primitive glTF document over the 44-byte test buffer.
    fn fixture(mode: u32, with_indices: bool, with_position: bool, b64: &str) -> GltfModel {
        let attributes = if with_position {
            r#""POSITION": 1"#
        } else {
            r#""NORMAL": 1"#
        };
        let indices = if with_indices { r#""indices": 0, "# } else { "" };
        let json = format!(
            r#"{{
                "asset": {{"version": "2.0"}},
                "buffers": [{{
                    "uri": "data:application/octet-stream;base64,{b64}",
                    "byteLength": 44
                }}],
                "bufferViews": [
                    {{"buffer": 0, "byteOffset": 0, "byteLength": 6}},
                    {{"buffer": 0, "byteOffset": 8, "byteLength": 36}}
                ],
                "accessors": [
                    {{"bufferView": 0, "componentType": 5123, "count": 3, "type": "SCALAR"}},
                    {{
                        "bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC3",
                        "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
                    }}
                ],
                "meshes": [{{
                    "primitives": [{{
                        "attributes": {{{attributes}}},
                        {indices}"mode": {mode}
                    }}]
                }}]
            }}"#
        );
        GltfModel::from_slice(json.as_bytes()).unwrap()
    }

    #[test]
    fn triangle_fixture_extracts_in_draw_order() {
        let model = fixture(4, true, true, TRIANGLE_B64);
        let lists = extract_all(&model);
        assert_eq!(lists.len(), 1);
        assert_eq!(
            lists[0].points,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ]
        );
        assert_eq!(lists[0].triangle_count(), 1);
    }

    #[test]
    fn extraction_is_deterministic() {
        let model = fixture(4, true, true, TRIANGLE_B64);
        let first = extract_all(&model);
        let second = extract_all(&model);
        assert_eq!(first, second);
    }

    #[test]
    fn non_triangle_mode_yields_nothing() {
        // Mode 1 = lines.
        let model = fixture(1, true, true, TRIANGLE_B64);
        assert!(extract_all(&model).is_empty());
    }

    #[test]
    fn missing_indices_yields_nothing() {
        let model = fixture(4, false, true, TRIANGLE_B64);
        assert!(extract_all(&model).is_empty());
    }

    #[test]
    fn missing_position_yields_nothing() {
        let model = fixture(4, true, false, TRIANGLE_B64);
        assert!(extract_all(&model).is_empty());
    }

    #[test]
    fn out_of_range_index_drops_primitive() {
        let model = fixture(4, true, true, OUT_OF_RANGE_B64);
        assert!(extract_all(&model).is_empty());
    }
}
