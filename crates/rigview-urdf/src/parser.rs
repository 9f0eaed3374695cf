//! Robot-description XML parser.
//!
//! Reads the `robot/link/visual/geometry/mesh` subset of the URDF format.
//! Structural problems (unreadable file, malformed XML, missing root) abort
//! the parse; per-link attribute problems are recovered with documented
//! defaults and a diagnostic.

use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{info, warn};

use crate::error::DescriptionError;
use crate::types::Link;

/// Parse a robot description file from disk into an ordered list of links.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Link>, DescriptionError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| DescriptionError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_str(&content)
}

/// Parse a robot description XML string into an ordered list of links.
pub fn parse_str(xml: &str) -> Result<Vec<Link>, DescriptionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    parse_document(&mut reader)
}

fn parse_document<R: BufRead>(reader: &mut Reader<R>) -> Result<Vec<Link>, DescriptionError> {
    let mut buf = Vec::new();
    let mut links: Option<Vec<Link>> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"robot" => {
                links = Some(parse_robot(reader)?);
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"robot" => {
                links = Some(Vec::new());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DescriptionError::Xml(e.to_string())),
        }
        buf.clear();
    }

    let links = links.ok_or(DescriptionError::MissingRoot)?;
    info!("Parsed {} links from robot description", links.len());
    Ok(links)
}

/// Parse the children of the `robot` root element.
fn parse_robot<R: BufRead>(reader: &mut Reader<R>) -> Result<Vec<Link>, DescriptionError> {
    let mut links = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let elem_name = e.name().as_ref().to_vec();
                if elem_name == b"link" {
                    links.push(log_link(parse_link(reader, e)?));
                } else {
                    skip_element(reader, &elem_name)?;
                }
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"link" => {
                links.push(log_link(link_from_attrs(e)));
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"robot" => break,
            Ok(Event::Eof) => {
                return Err(DescriptionError::Xml("unexpected EOF in <robot>".into()));
            }
            Ok(_) => {}
            Err(e) => return Err(DescriptionError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(links)
}

/// Parse one `link` element and its nested visual geometry.
fn parse_link<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
) -> Result<Link, DescriptionError> {
    let mut link = link_from_attrs(start);
    let mut saw_visual = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let elem_name = e.name().as_ref().to_vec();
                if elem_name == b"visual" && !saw_visual {
                    saw_visual = true;
                    parse_visual(reader, &mut link)?;
                } else {
                    skip_element(reader, &elem_name)?;
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"link" => break,
            Ok(Event::Eof) => {
                return Err(DescriptionError::Xml("unexpected EOF in <link>".into()));
            }
            Ok(_) => {}
            Err(e) => return Err(DescriptionError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(link)
}

fn log_link(link: Link) -> Link {
    info!(
        "Found link '{}', mesh={}, scale={}",
        link.name,
        link.mesh.as_deref().unwrap_or("<none>"),
        link.transform.scale.x
    );
    link
}

fn link_from_attrs(e: &BytesStart) -> Link {
    match get_attribute_opt(e, "name") {
        Some(name) => Link::new(name),
        None => {
            warn!("Link missing name attribute");
            Link::new("")
        }
    }
}

/// Parse a `visual` element, looking for its first `geometry` child.
fn parse_visual<R: BufRead>(
    reader: &mut Reader<R>,
    link: &mut Link,
) -> Result<(), DescriptionError> {
    let mut saw_geometry = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let elem_name = e.name().as_ref().to_vec();
                if elem_name == b"geometry" && !saw_geometry {
                    saw_geometry = true;
                    parse_geometry(reader, link)?;
                } else {
                    skip_element(reader, &elem_name)?;
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"visual" => break,
            Ok(Event::Eof) => {
                return Err(DescriptionError::Xml("unexpected EOF in <visual>".into()));
            }
            Ok(_) => {}
            Err(e) => return Err(DescriptionError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(())
}

/// Parse a `geometry` element, looking for its first `mesh` child.
fn parse_geometry<R: BufRead>(
    reader: &mut Reader<R>,
    link: &mut Link,
) -> Result<(), DescriptionError> {
    let mut saw_mesh = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let elem_name = e.name().as_ref().to_vec();
                if elem_name == b"mesh" && !saw_mesh {
                    saw_mesh = true;
                    apply_mesh_attrs(e, link);
                }
                skip_element(reader, &elem_name)?;
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"mesh" => {
                if !saw_mesh {
                    saw_mesh = true;
                    apply_mesh_attrs(e, link);
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"geometry" => break,
            Ok(Event::Eof) => {
                return Err(DescriptionError::Xml("unexpected EOF in <geometry>".into()));
            }
            Ok(_) => {}
            Err(e) => return Err(DescriptionError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(())
}

/// Apply `filename` and `scale` attributes of a `mesh` element to the link.
fn apply_mesh_attrs(e: &BytesStart, link: &mut Link) {
    match get_attribute_opt(e, "filename") {
        Some(filename) => link.mesh = Some(filename),
        None => warn!("Mesh in link '{}' missing filename attribute", link.name),
    }

    if let Some(raw) = get_attribute_opt(e, "scale") {
        let scale = parse_scale(&raw, &link.name);
        link.transform.scale = glam::Vec3::splat(scale);
    }
}

/// Parse the textual scale attribute into a uniform scale factor.
/// Unparsable or non-finite values fall back to 1.0.
fn parse_scale(raw: &str, link_name: &str) -> f32 {
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(
                "Link '{}' has unparsable scale attribute '{}', defaulting to 1.0",
                link_name, raw
            );
            1.0
        }
    }
}

fn get_attribute_opt(e: &BytesStart, name: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name.as_bytes() {
            return String::from_utf8(attr.value.to_vec()).ok();
        }
    }
    None
}

/// Skip an element and all of its children.
fn skip_element<R: BufRead>(
    reader: &mut Reader<R>,
    name: &[u8],
) -> Result<(), DescriptionError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == name => {
                depth += 1;
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == name => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DescriptionError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const SINGLE_LINK: &str = r#"
        <robot name="arm_bot">
            <link name="arm">
                <visual>
                    <geometry>
                        <mesh filename="arm.gltf" scale="2.5"/>
                    </geometry>
                </visual>
            </link>
        </robot>
    "#;

    const THREE_LINKS: &str = r#"
        <robot name="gantry">
            <link name="base">
                <visual>
                    <geometry>
                        <mesh filename="base.gltf"/>
                    </geometry>
                </visual>
            </link>
            <link name="column"/>
            <link name="beam">
                <visual>
                    <geometry>
                        <mesh filename="beam.gltf" scale="0.5"/>
                    </geometry>
                </visual>
            </link>
        </robot>
    "#;

    // -- Round trip --

    #[test]
    fn single_link_round_trip() {
        let links = parse_str(SINGLE_LINK).unwrap();
        assert_eq!(links.len(), 1);

        let link = &links[0];
        assert_eq!(link.name, "arm");
        assert_eq!(link.mesh.as_deref(), Some("arm.gltf"));
        assert_eq!(link.transform.scale, Vec3::new(2.5, 2.5, 2.5));
        assert_eq!(link.transform.translation, Vec3::ZERO);
        assert_eq!(link.transform.rotation_angle, 0.0);
        assert_eq!(link.transform.rotation_axis, Vec3::Y);
    }

    #[test]
    fn link_order_is_preserved() {
        let links = parse_str(THREE_LINKS).unwrap();
        let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["base", "column", "beam"]);
    }

    // -- Defaults --

    #[test]
    fn missing_scale_defaults_to_one() {
        let links = parse_str(THREE_LINKS).unwrap();
        assert_eq!(links[0].transform.scale, Vec3::ONE);
    }

    #[test]
    fn non_numeric_scale_defaults_to_one() {
        let xml = r#"
            <robot>
                <link name="arm">
                    <visual>
                        <geometry>
                            <mesh filename="arm.gltf" scale="big"/>
                        </geometry>
                    </visual>
                </link>
            </robot>
        "#;
        let links = parse_str(xml).unwrap();
        assert_eq!(links[0].transform.scale, Vec3::ONE);
    }

    #[test]
    fn nan_scale_defaults_to_one() {
        let xml = r#"
            <robot>
                <link name="arm">
                    <visual>
                        <geometry>
                            <mesh filename="arm.gltf" scale="NaN"/>
                        </geometry>
                    </visual>
                </link>
            </robot>
        "#;
        let links = parse_str(xml).unwrap();
        assert_eq!(links[0].transform.scale, Vec3::ONE);
    }

    #[test]
    fn missing_name_becomes_empty_string() {
        let xml = r#"<robot><link/></robot>"#;
        let links = parse_str(xml).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "");
    }

    #[test]
    fn missing_filename_leaves_mesh_unset() {
        let xml = r#"
            <robot>
                <link name="arm">
                    <visual>
                        <geometry>
                            <mesh scale="3.0"/>
                        </geometry>
                    </visual>
                </link>
            </robot>
        "#;
        let links = parse_str(xml).unwrap();
        assert!(links[0].mesh.is_none());
        // Scale still applies even without a filename.
        assert_eq!(links[0].transform.scale, Vec3::splat(3.0));
    }

    #[test]
    fn link_without_visual_has_no_mesh() {
        let xml = r#"<robot><link name="bare"/></robot>"#;
        let links = parse_str(xml).unwrap();
        assert!(links[0].mesh.is_none());
        assert_eq!(links[0].transform.scale, Vec3::ONE);
    }

    // -- Structure --

    #[test]
    fn empty_robot_yields_empty_list() {
        assert!(parse_str(r#"<robot name="empty"></robot>"#).unwrap().is_empty());
        assert!(parse_str(r#"<robot name="empty"/>"#).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let result = parse_str(r#"<automaton><link name="arm"/></automaton>"#);
        assert!(matches!(result, Err(DescriptionError::MissingRoot)));
    }

    #[test]
    fn mismatched_tags_are_an_error() {
        let result = parse_str(r#"<robot><link name="arm"></robot>"#);
        assert!(matches!(result, Err(DescriptionError::Xml(_))));
    }

    #[test]
    fn file_not_found_is_io_error() {
        let result = parse_file("/nonexistent/robot.urdf");
        assert!(matches!(result, Err(DescriptionError::Io { .. })));
    }

    #[test]
    fn first_visual_wins() {
        let xml = r#"
            <robot>
                <link name="arm">
                    <visual>
                        <geometry>
                            <mesh filename="first.gltf"/>
                        </geometry>
                    </visual>
                    <visual>
                        <geometry>
                            <mesh filename="second.gltf"/>
                        </geometry>
                    </visual>
                </link>
            </robot>
        "#;
        let links = parse_str(xml).unwrap();
        assert_eq!(links[0].mesh.as_deref(), Some("first.gltf"));
    }

    #[test]
    fn unknown_elements_are_skipped() {
        let xml = r#"
            <robot name="full">
                <material name="grey"><color rgba="0.5 0.5 0.5 1"/></material>
                <link name="arm">
                    <inertial><mass value="1.0"/></inertial>
                    <visual>
                        <origin xyz="0 0 0"/>
                        <geometry>
                            <mesh filename="arm.gltf"/>
                        </geometry>
                    </visual>
                    <collision>
                        <geometry><box size="1 1 1"/></geometry>
                    </collision>
                </link>
                <joint name="j0" type="fixed">
                    <parent link="arm"/>
                    <child link="arm"/>
                </joint>
            </robot>
        "#;
        let links = parse_str(xml).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].mesh.as_deref(), Some("arm.gltf"));
    }
}
