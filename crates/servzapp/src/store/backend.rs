use crate::error::Result;
use crate::model::ServerRecord;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (identifiers, import policy).
pub trait StorageBackend {
    /// Load the full record collection. A store that was never written is empty.
    fn load_records(&self) -> Result<Vec<ServerRecord>>;

    /// Replace the stored collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_records(&self, records: &[ServerRecord]) -> Result<()>;

    /// Where the collection lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
