use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use saletrack::storage::JsonStorage;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated storage backend rooted in a unique directory.
pub fn setup_storage() -> (JsonStorage, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    (storage, base)
}
