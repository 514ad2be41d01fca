//! # Serialization Adapter: YAML Documents
//!
//! Converts the record collection to and from a YAML document for bulk export and
//! import.
//!
//! ## Document Format
//!
//! ```text
//! - id: 1                    <-- only when the record has an identifier
//!   serverName: db01
//!   standort: Berlin
//!   dmz: ''
//!   ...                      <-- all 27 keys, canonical order
//! - id: 2
//!   serverName: db02
//!   ...
//! ```
//!
//! Export always writes every field, empty ones included, in the canonical column order
//! so two exports of the same data are byte-identical and diff cleanly.
//!
//! ## Import Rules
//!
//! - Unknown keys are ignored; missing keys become empty strings.
//! - Identifiers are kept exactly as written (or left absent). Import never assigns.
//! - No field validation: a record without a server name is imported as-is.
//! - Anything that is not a sequence of mappings is a [`ServzError::Parse`]. There is no
//!   partial recovery; one bad entry fails the whole document.
//!
//! A blank document or a bare `~` is an empty collection.

use crate::error::{Result, ServzError};
use crate::model::ServerRecord;
use serde::Serialize;

/// File name offered for exported documents.
pub const EXPORT_FILE_NAME: &str = "servers.yaml";

/// Media type of exported documents.
pub const EXPORT_MEDIA_TYPE: &str = "application/x-yaml";

/// Render the full collection as a YAML document.
pub fn export_document(records: &[ServerRecord]) -> Result<String> {
    serde_yaml::to_string(records).map_err(ServzError::Export)
}

/// Parse a YAML document into records.
pub fn import_document(text: &str) -> Result<Vec<ServerRecord>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<ServerRecord>> =
        serde_yaml::from_str(text).map_err(ServzError::Parse)?;
    Ok(records.unwrap_or_default())
}

/// A rendered export, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub media_type: &'static str,
    pub record_count: usize,
    #[serde(skip)]
    pub content: String,
}

impl ExportArtifact {
    pub fn render(records: &[ServerRecord], file_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            file_name: file_name.into(),
            media_type: EXPORT_MEDIA_TYPE,
            record_count: records.len(),
            content: export_document(records)?,
        })
    }
}
