//! Rigview URDF - Robot-description parsing
//!
//! Parses URDF-style robot description files into an ordered list of links,
//! each carrying its mesh reference and transform parameters. Only the
//! visual mesh subset of the format is read; joints, collision shapes, and
//! inertial data are not part of the viewer.

mod error;
mod parser;
mod types;

pub use error::DescriptionError;
pub use parser::{parse_file, parse_str};
pub use types::Link;
