//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for servz operations, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: raw `KEY=VALUE` strings become typed assignments and
//!   column filters, and config defaults fill in omitted options
//! - **Returns structured types** (`Result<CmdResult>`, [`ExportArtifact`])
//!
//! It does no business logic and no terminal I/O.
//!
//! ## Assignments and Filters
//!
//! - **Assignment**: `KEY=VALUE` where `KEY` is any canonical field key
//!   (`standort=Berlin`). Only the first `=` splits, so values may contain `=`.
//! - **Column filter**: `KEY=VALUE` where `KEY` is a filterable column; see
//!   [`crate::filter::parse_column_filter`].
//!
//! Unknown or non-filterable keys are a [`ServzError::Validation`].
//!
//! ## Generic Over DataStore
//!
//! `ServzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ServzApi<FileStore>`
//! - Testing: `ServzApi<InMemoryStore>`

use crate::columns::get_column;
use crate::commands;
use crate::config::ServzConfig;
use crate::document::ExportArtifact;
use crate::error::{Result, ServzError};
use crate::filter::{parse_column_filter, ServerFilter};
use crate::model::{ServerFields, ServerId};
use crate::store::{DataStore, ImportMode};
use std::path::PathBuf;

/// The main API facade for servz operations.
pub struct ServzApi<S: DataStore> {
    store: S,
    config: ServzConfig,
}

impl<S: DataStore> ServzApi<S> {
    pub fn new(store: S, config: ServzConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ServzConfig {
        &self.config
    }

    pub fn list_servers<F: AsRef<str>>(
        &self,
        search: &str,
        filters: &[F],
    ) -> Result<commands::CmdResult> {
        let mut filter = ServerFilter::new().with_search(search);
        for raw in filters {
            let (key, value) = parse_column_filter(raw.as_ref())?;
            filter = filter.with_column(key, value);
        }
        commands::list::run(&self.store, &filter)
    }

    pub fn view_servers(&self, ids: &[ServerId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn create_server<A: AsRef<str>>(
        &mut self,
        server_name: &str,
        assignments: &[A],
    ) -> Result<commands::CmdResult> {
        let mut fields = ServerFields::with_server_name(server_name);
        for (key, value) in parse_assignments(assignments)? {
            fields.set(&key, value)?;
        }
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_server<A: AsRef<str>>(
        &mut self,
        id: ServerId,
        assignments: &[A],
    ) -> Result<commands::CmdResult> {
        let assignments = parse_assignments(assignments)?;
        commands::update::run(&mut self.store, id, &assignments)
    }

    /// Import files or directories. `mode` falls back to the configured import mode.
    pub fn import_servers(
        &mut self,
        paths: Vec<PathBuf>,
        mode: Option<ImportMode>,
    ) -> Result<commands::CmdResult> {
        let mode = mode.unwrap_or_else(|| self.config.import_mode());
        let exts = self.config.import_extensions();
        commands::import::run(&mut self.store, paths, &exts, mode)
    }

    pub fn import_document(
        &mut self,
        text: &str,
        mode: Option<ImportMode>,
    ) -> Result<commands::CmdResult> {
        let mode = mode.unwrap_or_else(|| self.config.import_mode());
        commands::import::run_text(&mut self.store, text, mode)
    }

    /// Render the collection; `file_name` falls back to the configured export file.
    pub fn export_servers(&self, file_name: Option<&str>) -> Result<ExportArtifact> {
        let file_name = file_name.unwrap_or(&self.config.export_file);
        commands::export::run(&self.store, file_name)
    }
}

/// Parse `KEY=VALUE` assignments against the canonical field keys.
pub fn parse_assignments<A: AsRef<str>>(raw: &[A]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|item| {
            let item = item.as_ref();
            let (key, value) = item.split_once('=').ok_or_else(|| {
                ServzError::Validation(format!(
                    "Assignment must look like KEY=VALUE, got: {}",
                    item
                ))
            })?;
            let column = get_column(key.trim())
                .ok_or_else(|| ServzError::Validation(format!("Unknown field: {}", key.trim())))?;
            Ok((column.key.to_string(), value.to_string()))
        })
        .collect()
}
