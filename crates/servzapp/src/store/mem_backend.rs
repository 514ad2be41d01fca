use super::backend::StorageBackend;
use crate::error::{Result, ServzError};
use crate::model::ServerRecord;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since servz is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<Vec<ServerRecord>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves, for asserting single-write behaviour.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Vec<ServerRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn save_records(&self, records: &[ServerRecord]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ServzError::Store("Simulated write error".to_string()));
        }
        *self.records.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://servers")
    }
}
