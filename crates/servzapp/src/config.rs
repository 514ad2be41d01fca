//! # Configuration
//!
//! servz configuration is loaded with [`confique`] from an optional `servz.toml` in the
//! data directory, with environment variables layered on top.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SERVZ_EXPORT_FILE`.
//! 2. **Config file**: `<data dir>/servz.toml`, if present.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `export_file` | `servers.yaml` | File name for `servz export` |
//! | `import_mode` | `merge` | `merge` or `replace` for `servz import` |
//! | `import_extensions` | `[".yaml", ".yml"]` | Extensions picked up when importing a directory |

use crate::document::EXPORT_FILE_NAME;
use crate::error::{Result, ServzError};
use crate::store::ImportMode;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "servz.toml";

fn default_import_ext() -> Vec<String> {
    vec![".yaml".to_string(), ".yml".to_string()]
}

/// Configuration for servz, stored in `servz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServzConfig {
    /// File name used by `servz export` when none is given
    #[config(default = "servers.yaml", env = "SERVZ_EXPORT_FILE")]
    pub export_file: String,

    /// How imports combine with existing records: "merge" or "replace".
    /// When absent, imports merge.
    pub import_mode: Option<ImportMode>,

    /// Extensions to look for when importing directories.
    /// When absent, defaults to [".yaml", ".yml"].
    pub import_extensions: Option<Vec<String>>,
}

impl Default for ServzConfig {
    fn default() -> Self {
        Self {
            export_file: EXPORT_FILE_NAME.to_string(),
            import_mode: None,
            import_extensions: None,
        }
    }
}

impl ServzConfig {
    /// Load from the environment and `<data_dir>/servz.toml`. A missing file is fine.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| ServzError::Config(e.to_string()))
    }

    pub fn import_mode(&self) -> ImportMode {
        self.import_mode.unwrap_or_default()
    }

    /// Get import extensions normalized to start with a dot, using defaults if not configured.
    pub fn import_extensions(&self) -> Vec<String> {
        self.import_extensions
            .clone()
            .unwrap_or_else(default_import_ext)
            .into_iter()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect()
    }
}
