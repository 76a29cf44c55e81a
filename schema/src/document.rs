//! The document-input contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A document supplied for extraction, encoded as a self-describing string.
///
/// The payload is opaque to this crate: it is handed to the extraction
/// engine verbatim and never decoded locally, so decodability is the
/// engine's concern. The usual encoding is a data URI carrying a media-type
/// prefix, e.g. `data:application/pdf;base64,...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentPayload {
    /// The encoded document bytes.
    pub document: String,
}

impl DocumentPayload {
    /// Creates a payload from an already-encoded document string.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}
