//! Document ingestion.
//!
//! The model-definition language parser is an external collaborator; this
//! module only fixes the seam. [`JsonSource`] covers the plugin-host case
//! where the document crosses the process boundary already parsed, as JSON.

use thiserror::Error;

use crate::Document;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid model document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplies a parsed [`Document`] from raw definition text.
pub trait DocumentSource {
    /// Parse `text` into a document. `features` is the host's feature-flag
    /// list, passed through for compatibility; sources may ignore it.
    fn load(&self, text: &str, features: &[String]) -> Result<Document, ModelError>;
}

/// JSON-backed document source.
pub struct JsonSource;

impl DocumentSource for JsonSource {
    fn load(&self, text: &str, _features: &[String]) -> Result<Document, ModelError> {
        Ok(serde_json::from_str(text)?)
    }
}
