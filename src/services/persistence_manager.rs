use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::constants::{HISTORY_STORAGE_KEY, SETTINGS_STORAGE_KEY};
use crate::errors::{ErrorHandler, IntelliCodeError};
use crate::services::history_manager::HistoryManager;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::settings::Settings;
use crate::traits::key_value_store::KeyValueStore;

/// Reads and writes history and settings. Failures are logged and replaced
/// with defaults on read, or dropped on write; nothing is raised to the caller.
pub struct PersistenceManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_history(&self) -> Vec<AnalysisRecord> {
        let history: Vec<AnalysisRecord> = self.load_or_default(HISTORY_STORAGE_KEY);
        HistoryManager::enforce_capacity(history)
    }

    pub fn load_settings(&self) -> Settings {
        self.load_or_default(SETTINGS_STORAGE_KEY)
    }

    pub fn save_history(&mut self, history: &[AnalysisRecord]) {
        self.save(HISTORY_STORAGE_KEY, history);
    }

    pub fn save_settings(&mut self, settings: &Settings) {
        self.save(SETTINGS_STORAGE_KEY, settings);
    }

    pub fn clear_history(&mut self) {
        if let Err(e) = self.store.remove(HISTORY_STORAGE_KEY) {
            ErrorHandler::handle_degraded(&IntelliCodeError::write_error(HISTORY_STORAGE_KEY, &e.to_string()));
        }
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("📋 Nothing saved under {}, using defaults", key);
                return T::default();
            }
            Err(e) => {
                ErrorHandler::handle_degraded(&IntelliCodeError::read_error(key, &e.to_string()));
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                ErrorHandler::handle_degraded(&IntelliCodeError::read_error(key, &e.to_string()));
                T::default()
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|e| e.to_string())
            .and_then(|json| self.store.set(key, &json).map_err(|e| e.to_string()));

        if let Err(reason) = result {
            ErrorHandler::handle_degraded(&IntelliCodeError::write_error(key, &reason));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::file_store::FileStore;
    use crate::services::storage::memory_store::MemoryStore;

    #[test]
    fn test_missing_entries_fall_back_to_defaults() {
        let persistence = PersistenceManager::new(MemoryStore::new());
        assert!(persistence.load_history().is_empty());
        assert_eq!(persistence.load_settings(), Settings::default());
    }

    #[test]
    fn test_malformed_entries_are_swallowed() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_STORAGE_KEY, "[{not json").unwrap();
        store.set(SETTINGS_STORAGE_KEY, "42").unwrap();
        let persistence = PersistenceManager::new(store);
        assert!(persistence.load_history().is_empty());
        assert_eq!(persistence.load_settings(), Settings::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let mut persistence = PersistenceManager::new(MemoryStore::new());
        let settings = Settings::default().with_value("autoSave", "false").unwrap();
        persistence.save_settings(&settings);
        assert_eq!(persistence.load_settings(), settings);
    }

    #[test]
    fn test_unwritable_store_is_swallowed() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut persistence = PersistenceManager::new(FileStore::new(&blocker));
        persistence.save_settings(&Settings::default().with_value("autoSave", "false").unwrap());
        persistence.save_history(&[]);
        persistence.clear_history();

        assert_eq!(persistence.load_settings(), Settings::default());
        assert!(persistence.load_history().is_empty());
    }

    #[test]
    fn test_clear_history_removes_key_only() {
        let mut persistence = PersistenceManager::new(MemoryStore::new());
        persistence.save_history(&[]);
        persistence.save_settings(&Settings::default());
        persistence.clear_history();
        assert_eq!(persistence.store().len(), 1);
    }
}
