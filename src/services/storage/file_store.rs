use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use crate::enums::storage_error::{StorageError, StorageResult};
use crate::traits::key_value_store::KeyValueStore;

/// One `<key>.json` file per key inside a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io { key: key.to_string(), source }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(StorageError::Malformed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| Self::io_error(key, e))?;
        fs::write(self.path_for(key), value).map_err(|e| Self::io_error(key, e))?;
        log::debug!("💾 Wrote {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert!(store.get("appSettings").unwrap().is_none());
        store.set("appSettings", "{}").unwrap();
        assert_eq!(store.get("appSettings").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("nested/appSettings.json").exists());

        store.remove("appSettings").unwrap();
        store.remove("appSettings").unwrap();
        assert!(store.get("appSettings").unwrap().is_none());
    }

    #[test]
    fn test_non_utf8_content_is_malformed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("analysisHistory.json"), [0xff, 0xfe, 0x00]).unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.get("analysisHistory"), Err(StorageError::Malformed { .. })));
    }
}
