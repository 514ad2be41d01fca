//! # Filter Engine
//!
//! Computes the visible subset of server records from two inputs:
//!
//! - a **global search** query, matched against every field of a record, and
//! - a set of **column filters**, one optional substring per filterable column.
//!
//! A record is kept only if it passes the search and every column filter. All
//! comparisons are case-insensitive substring matches; there is no tokenizing and no
//! ranking. An empty query or an empty column filter matches everything.
//!
//! The engine is a pure function of its inputs: it never fails, keeps the input
//! order, and holds no state. Callers own the search text and filter values (see
//! [`ServerFilter`]) and pass them in on every call.
//!
//! Column filters only exist for the columns flagged `filterable` in
//! [`crate::columns`]. Entries for other keys are ignored here; user input is checked
//! earlier by [`parse_column_filter`].

use crate::columns::{filterable_columns, get_column};
use crate::error::{Result, ServzError};
use crate::model::ServerRecord;
use std::collections::BTreeMap;
use tracing::warn;

/// Per-column filter values keyed by canonical column key.
pub type ColumnFilters = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerFilter {
    pub search: String,
    pub columns: ColumnFilters,
}

impl ServerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn with_column(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.columns.insert(key.into(), value.into());
        self
    }

    pub fn matches(&self, record: &ServerRecord) -> bool {
        matches_search(record, &self.search.to_lowercase())
            && matches_columns(record, &self.columns)
    }

    pub fn apply(&self, records: &[ServerRecord]) -> Vec<ServerRecord> {
        filter(records, &self.search, &self.columns)
    }
}

/// Records passing both the global search and every column filter, in input order.
pub fn filter(
    records: &[ServerRecord],
    search_query: &str,
    column_filters: &ColumnFilters,
) -> Vec<ServerRecord> {
    for key in column_filters.keys() {
        if !get_column(key).is_some_and(|col| col.filterable) {
            warn!(column = %key, "ignoring filter on non-filterable column");
        }
    }

    let query = search_query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_search(record, &query) && matches_columns(record, column_filters))
        .cloned()
        .collect()
}

/// `query` must already be lowercased.
fn matches_search(record: &ServerRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let id_matches = record
        .id
        .is_some_and(|id| id.to_string().contains(query));
    id_matches
        || record
            .fields
            .values()
            .any(|value| value.to_lowercase().contains(query))
}

fn matches_columns(record: &ServerRecord, column_filters: &ColumnFilters) -> bool {
    filterable_columns().all(|col| {
        let wanted = match column_filters.get(col.key) {
            Some(value) if !value.is_empty() => value.to_lowercase(),
            _ => return true,
        };
        record
            .fields
            .get(col.key)
            .is_some_and(|value| value.to_lowercase().contains(&wanted))
    })
}

/// Parse a `key=value` column filter, accepting only filterable columns.
pub fn parse_column_filter(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        ServzError::Validation(format!("Filter must look like KEY=VALUE, got: {}", raw))
    })?;
    let key = key.trim();
    match get_column(key) {
        Some(col) if col.filterable => Ok((col.key.to_string(), value.to_string())),
        Some(_) => Err(ServzError::Validation(format!(
            "Column {} cannot be filtered; filterable columns: {}",
            key,
            filterable_keys()
        ))),
        None => Err(ServzError::Validation(format!(
            "Unknown column: {}; filterable columns: {}",
            key,
            filterable_keys()
        ))),
    }
}

fn filterable_keys() -> String {
    filterable_columns()
        .map(|col| col.key)
        .collect::<Vec<_>>()
        .join(", ")
}
