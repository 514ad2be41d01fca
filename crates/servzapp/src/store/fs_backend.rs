use super::backend::StorageBackend;
use crate::error::{Result, ServzError};
use crate::model::ServerRecord;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub const DATA_FILE: &str = "servers.json";

pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(ServzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Vec<ServerRecord>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(ServzError::Io)?;
        let records: Vec<ServerRecord> =
            serde_json::from_str(&content).map_err(ServzError::Serialization)?;
        debug!(path = %data_file.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save_records(&self, records: &[ServerRecord]) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_file();
        let content = serde_json::to_string_pretty(records).map_err(ServzError::Serialization)?;

        // Atomic write
        let tmp_file = self.data_dir.join(format!(".servers-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ServzError::Io)?;
        if let Err(err) = fs::rename(&tmp_file, &data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ServzError::Io(err));
        }

        debug!(path = %data_file.display(), count = records.len(), "saved records");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file()
    }
}
