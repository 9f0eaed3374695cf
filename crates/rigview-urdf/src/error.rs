use std::path::PathBuf;

/// Errors that can occur while parsing a robot description document.
///
/// All of these abort the parse step as a whole; per-link attribute problems
/// are recovered locally with defaults and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    #[error("failed to read description file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed description XML: {0}")]
    Xml(String),

    #[error("no <robot> root element in description")]
    MissingRoot,
}
