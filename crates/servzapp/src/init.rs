//! # Data Directory Resolution
//!
//! servz keeps one record collection per data directory. [`initialize`] picks the
//! directory, loads its configuration, and wires a [`FileStore`] into the API.
//!
//! The data directory is resolved in priority order:
//!
//! 1. `data_override` (the CLI's `--data` flag)
//! 2. the `SERVZ_DATA` environment variable
//! 3. the OS data directory via the `directories` crate
//!    (e.g. `~/.local/share/servz` on Linux)
//!
//! The directory does not need to exist; it is created on the first write.

use crate::api::ServzApi;
use crate::config::ServzConfig;
use crate::error::{Result, ServzError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_ENV: &str = "SERVZ_DATA";

pub struct ServzContext {
    pub api: ServzApi<FileStore>,
    pub config: ServzConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "servz", "servz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ServzError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<ServzContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = ServzConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "initialized");

    let store = FileStore::new_fs(data_dir.clone());
    Ok(ServzContext {
        api: ServzApi::new(store, config.clone()),
        config,
        data_dir,
    })
}
