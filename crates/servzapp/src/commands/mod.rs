//! # Command Layer
//!
//! This module contains the **core business logic** of servz. Each command lives in its
//! own submodule as a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate input before anything is written
//! - Operate on [`ServerRecord`] and [`ServerFields`](crate::model::ServerFields)
//! - Return structured [`CmdResult`] with listed/affected records and messages
//! - Stay UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal output**: no stdout/stderr; messages are data
//! - **Argument parsing**: raw `key=value` strings are parsed by the API layer
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! The only filesystem access here is reading import files in [`import`].
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch, including the error paths
//! that must leave the store untouched.
//!
//! ## Command Modules
//!
//! - [`list`]: Filtered listing
//! - [`view`]: Full records by identifier
//! - [`create`]: Add a server
//! - [`update`]: Edit fields of an existing server
//! - [`import`]: Bulk import from YAML documents
//! - [`export`]: Render the collection as a YAML document

use crate::model::ServerRecord;
use serde::Serialize;

pub mod create;
pub mod export;
pub mod import;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub listed_servers: Vec<ServerRecord>,
    pub affected_servers: Vec<ServerRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_servers(mut self, servers: Vec<ServerRecord>) -> Self {
        self.listed_servers = servers;
        self
    }

    pub fn with_affected_servers(mut self, servers: Vec<ServerRecord>) -> Self {
        self.affected_servers = servers;
        self
    }
}
