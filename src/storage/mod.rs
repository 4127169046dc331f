pub mod json_backend;
pub mod memory;

use crate::{errors::SaleTrackError, journal::SaleRecord};

pub type Result<T> = std::result::Result<T, SaleTrackError>;

/// Abstraction over persistence backends holding the record collection as a
/// single replaceable blob.
pub trait StorageBackend: Send + Sync {
    /// Reads the whole collection. A backend with nothing stored yet returns
    /// an empty list rather than an error.
    fn load(&self) -> Result<Vec<SaleRecord>>;

    /// Replaces the stored collection with `records`.
    fn save(&self, records: &[SaleRecord]) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
