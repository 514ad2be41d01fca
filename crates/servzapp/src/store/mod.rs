//! # Storage Layer
//!
//! This module defines the storage abstraction for servz. The [`DataStore`] trait is
//! the record store the rest of the crate talks to; how the collection is persisted is
//! delegated to a [`backend::StorageBackend`].
//!
//! ## Layering
//!
//! ```text
//! DataStore (trait)            <-- list / get / create / update / bulk_import
//!     └── RecordStore<B>       <-- identifier assignment, import policy
//!             └── B: StorageBackend   <-- load / save the whole collection
//!                     ├── FsBackend    (servers.json on disk)
//!                     └── MemBackend   (tests)
//! ```
//!
//! The collection is small, so every mutation loads the full list, changes it in
//! memory, and saves it back with one write. A failed save leaves the previous file
//! in place, which is what makes imports all-or-nothing.
//!
//! ## Identifiers
//!
//! New records get the highest identifier in the collection plus one (starting at 1).
//! Records are never deleted, so identifiers are not reused.
//!
//! ## Import Policy
//!
//! [`ImportMode::Merge`] keeps the existing collection: an imported record whose
//! identifier is already present replaces that record in place, any other record is
//! appended (keeping its identifier, or receiving a fresh one if it has none).
//! [`ImportMode::Replace`] discards the existing collection first. In both modes a
//! repeated identifier inside one import resolves to the later entry.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── servers.json    # The record collection (JSON array, insertion order)
//! └── servz.toml      # Optional configuration
//! ```

use crate::error::Result;
use crate::model::{ServerFields, ServerId, ServerRecord};
use serde::{Deserialize, Serialize};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// How an import combines with the records already in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    #[default]
    Merge,
    Replace,
}

/// Outcome of a bulk import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Records appended to the collection
    pub created: usize,
    /// Existing records overwritten by an imported record with the same identifier
    pub replaced: usize,
    /// Records dropped because the import replaced the whole collection
    pub removed: usize,
}

impl ImportReport {
    pub fn imported(&self) -> usize {
        self.created + self.replaced
    }
}

/// Abstract interface for the record store.
pub trait DataStore {
    /// All records in insertion order
    fn list(&self) -> Result<Vec<ServerRecord>>;

    /// A single record by identifier
    fn get(&self, id: ServerId) -> Result<ServerRecord>;

    /// Persist a new record, assigning its identifier
    fn create(&mut self, fields: ServerFields) -> Result<ServerRecord>;

    /// Overwrite an existing record's fields, keeping its identifier
    fn update(&mut self, record: &ServerRecord) -> Result<ServerRecord>;

    /// Apply a batch of imported records in a single write
    fn bulk_import(&mut self, records: Vec<ServerRecord>, mode: ImportMode)
        -> Result<ImportReport>;
}
