//! # servzapp
//!
//! Core library for servz, a local inventory of database servers. Each record
//! describes one server with 27 free-text fields (name, site, customer, operating
//! system, DBMS, addresses, lifecycle data...). The library lets a client list the
//! inventory through a global search plus per-column filters, create and edit records,
//! and move the whole collection in and out as a YAML document.
//!
//! ## Architecture
//!
//! ```text
//! UI (servz CLI)
//!     └── api::ServzApi        <-- parses KEY=VALUE input, applies config defaults
//!             └── commands::*  <-- business logic, returns CmdResult
//!                     ├── filter    (pure search / column filtering)
//!                     ├── document  (YAML export / import)
//!                     └── store     (DataStore: RecordStore over a backend)
//! ```
//!
//! - [`model`]: `ServerRecord`, `ServerFields`, field validation
//! - [`columns`]: the static column table (labels, filterable flags, display order)
//! - [`filter`]: the filter engine
//! - [`document`]: the YAML serialization adapter
//! - [`store`]: record storage, identifier assignment, bulk import policy
//! - [`commands`]: one module per operation
//! - [`api`]: the facade UIs talk to
//! - [`config`] / [`init`]: `servz.toml` loading and data directory resolution
//! - [`error`]: the crate-wide `ServzError`

pub mod api;
pub mod columns;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod store;
