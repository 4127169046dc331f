use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    journal::SaleRecord,
    utils::{ensure_dir, paths},
};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// File-backed storage: the whole collection lives in one pretty-printed JSON
/// array at a fixed path under the app data directory.
#[derive(Clone)]
pub struct JsonStorage {
    entries_file: PathBuf,
}

impl JsonStorage {
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let root = base.unwrap_or_else(paths::app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            entries_file: paths::entries_file_in(&root),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn entries_path(&self) -> &Path {
        &self.entries_file
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<SaleRecord>> {
        if !self.entries_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.entries_file)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, records: &[SaleRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(&records)?;
        let tmp = tmp_path(&self.entries_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.entries_file)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    fn sample_record(day: u32) -> SaleRecord {
        SaleRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            120.0,
            80.0,
            45.5,
            Some("market day".into()),
        )
        .expect("valid record")
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let records = vec![sample_record(2), sample_record(1)];
        storage.save(&records).expect("save records");
        let loaded = storage.load().expect("load records");
        assert_eq!(loaded, records);
    }

    #[test]
    fn load_without_blob_is_empty() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load().expect("load records").is_empty());
    }

    #[test]
    fn corrupt_blob_surfaces_an_error() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.entries_path(), "{not json").expect("write corrupt blob");
        assert!(storage.load().is_err());
    }

    #[test]
    fn save_leaves_no_staging_file_behind() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&[sample_record(3)]).expect("save records");
        assert!(storage.entries_path().exists());
        assert!(!tmp_path(storage.entries_path()).exists());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let (storage, _guard) = storage_with_temp_dir();
        storage
            .save(&[sample_record(1), sample_record(2)])
            .expect("first save");
        storage.save(&[sample_record(9)]).expect("second save");
        let loaded = storage.load().expect("load records");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date.to_string(), "2024-03-09");
    }
}
