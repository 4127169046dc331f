//! The authoritative in-memory record collection with write-through
//! persistence.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{journal::SaleRecord, storage::StorageBackend};

/// Owns every record for the session, newest first, and mirrors each change
/// to the injected backend. Persistence failures are logged and swallowed so
/// the shell stays interactive; the in-memory state is authoritative.
pub struct RecordStore {
    records: Vec<SaleRecord>,
    storage: Box<dyn StorageBackend>,
}

impl RecordStore {
    /// Loads whatever the backend holds. A failed load (corrupt blob, IO
    /// trouble) is logged and the session starts empty.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let records = match storage.load() {
            Ok(mut records) => {
                sort_newest_first(&mut records);
                records
            }
            Err(err) => {
                warn!(error = %err, "Could not read saved records; starting with an empty journal.");
                Vec::new()
            }
        };
        Self { records, storage }
    }

    /// All records, sorted by date descending.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&SaleRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Inserts the record and re-sorts newest first. Among records sharing a
    /// date the latest insertion stays on top.
    pub fn add(&mut self, record: SaleRecord) {
        debug!(id = %record.id, date = %record.date, "Adding sale record.");
        self.records.insert(0, record);
        sort_newest_first(&mut self.records);
        self.persist();
    }

    /// Removes the record with `id` when present and reports whether anything
    /// changed. The collection is persisted either way.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            debug!(%id, "Removed sale record.");
        }
        self.persist();
        removed
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.records) {
            warn!(error = %err, "Could not persist records; keeping in-memory state.");
        }
    }
}

fn sort_newest_first(records: &mut [SaleRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
