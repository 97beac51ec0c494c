//! Error types for the enrichment engine.
//!
//! Enhancement itself is total and never fails; only the export surface
//! can error, and even there a serialization failure would require an
//! enriched value that serde_json cannot represent, which the data model
//! rules out.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The requested export format name is not one of text/markdown/json.
    UnknownFormat(String),

    /// serde_json failed to serialize the enriched summary.
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownFormat(name) => write!(f, "Unknown export format: {}", name),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
