use std::sync::{Arc, Mutex};

use crate::{errors::SaleTrackError, journal::SaleRecord};

use super::{Result, StorageBackend};

/// In-memory backend standing in for the file store in tests and demos.
/// Clones share the same underlying collection, so a test can keep one handle
/// while the store owns the other.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    records: Arc<Mutex<Vec<SaleRecord>>>,
    fail_saves: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts pre-populated, as if a blob had been persisted earlier.
    pub fn with_records(records: Vec<SaleRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_saves: false,
        }
    }

    /// Every save fails with a storage error; loads still work.
    pub fn failing_saves() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail_saves: true,
        }
    }

    /// Copy of the currently persisted collection.
    pub fn snapshot(&self) -> Vec<SaleRecord> {
        self.records
            .lock()
            .expect("memory storage lock poisoned")
            .clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Vec<SaleRecord>> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[SaleRecord]) -> Result<()> {
        if self.fail_saves {
            return Err(SaleTrackError::StorageError(
                "memory backend rejected the write".into(),
            ));
        }
        *self.records.lock().expect("memory storage lock poisoned") = records.to_vec();
        Ok(())
    }
}
