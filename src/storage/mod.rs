// SPDX-License-Identifier: MPL-2.0
//! Durable string key/value storage.
//!
//! [`FileStorage`] keeps every entry in a single CBOR file inside the
//! application data directory. [`MemoryStorage`] has the same interface
//! without touching the disk.

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// A string key/value store.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage backed by a CBOR file. Each write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the store at the default data directory location.
    ///
    /// Returns the store and an optional warning when an existing file
    /// could not be read. An unreadable file starts empty and is
    /// overwritten on the next write.
    pub fn open() -> (Option<Self>, Option<String>) {
        match paths::get_storage_path_with_override(None) {
            Some(path) => {
                let (storage, warning) = Self::open_at(path);
                (Some(storage), warning)
            }
            None => (
                None,
                Some("No data directory available, input will not be saved.".to_string()),
            ),
        }
    }

    /// Opens the store at an explicit file path.
    pub fn open_at(path: PathBuf) -> (Self, Option<String>) {
        if !path.exists() {
            return (
                Self {
                    path,
                    entries: BTreeMap::new(),
                },
                None,
            );
        }

        match read_entries(&path) {
            Ok(entries) => (Self { path, entries }, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to read storage: {err}");
                (
                    Self {
                        path,
                        entries: BTreeMap::new(),
                    },
                    Some("Saved input could not be restored.".to_string()),
                )
            }
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        ciborium::into_writer(&self.entries, BufWriter::new(file)).map_err(Error::from)
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let file = fs::File::open(path)?;
    let entries = ciborium::from_reader(BufReader::new(file))?;
    Ok(entries)
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-process storage, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty_without_warning() {
        let dir = tempdir().expect("temp dir");
        let (storage, warning) = FileStorage::open_at(dir.path().join("storage.cbor"));
        assert!(warning.is_none());
        assert_eq!(storage.get_item("anything"), None);
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("storage.cbor");

        let (mut storage, _) = FileStorage::open_at(path.clone());
        storage.set_item("dtb-parameters", "A, B").expect("write");
        storage.set_item("dtb-parameters", "A, B, C").expect("overwrite");

        let (reopened, warning) = FileStorage::open_at(path);
        assert!(warning.is_none());
        assert_eq!(reopened.get_item("dtb-parameters").as_deref(), Some("A, B, C"));
    }

    #[test]
    fn corrupted_file_opens_empty_with_warning() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("storage.cbor");
        fs::write(&path, [0xff, 0x00, 0x13]).expect("write garbage");

        let (storage, warning) = FileStorage::open_at(path);
        assert!(warning.is_some());
        assert_eq!(storage.get_item("dtb-training-data"), None);
    }

    #[test]
    fn memory_storage_overwrites() {
        let mut storage = MemoryStorage::default();
        storage.set_item("k", "1").expect("write");
        storage.set_item("k", "2").expect("write");
        assert_eq!(storage.get_item("k").as_deref(), Some("2"));
    }
}
