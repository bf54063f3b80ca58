//! Snapshot Storage
//!
//! Key-value persistence for the catalogue snapshot. The browser backend is
//! `window.localStorage`; `MemoryStore` stands in when it is unavailable.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::config::StorageKeys;
use crate::error::StorageError;
use crate::models::CatalogueItem;

/// Minimal string key-value interface
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// In-memory store, lost on reload
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Catalogue snapshot plus the time it was fetched
#[derive(Clone)]
pub struct SnapshotStore<S> {
    backend: S,
    keys: StorageKeys,
}

/// What the app holds: local storage, or memory if that fails to open
pub type SharedSnapshots = SnapshotStore<Rc<dyn KeyValueStore>>;

impl SharedSnapshots {
    pub fn open(keys: StorageKeys) -> Self {
        let backend: Rc<dyn KeyValueStore> = match BrowserStorage::local() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                log::warn!("Falling back to in-memory snapshots: {}", e);
                Rc::new(MemoryStore::default())
            }
        };
        SnapshotStore::new(backend, keys)
    }
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(backend: S, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    /// Drop the snapshot and its fetch time
    pub fn invalidate(&self) -> Result<(), StorageError> {
        self.backend.remove_item(&self.keys.snapshot_key)?;
        self.backend.remove_item(&self.keys.fetched_at_key)
    }

    /// Overwrite the whole snapshot
    pub fn save(&self, rows: &[CatalogueItem]) -> Result<(), StorageError> {
        let json = serde_json::to_string(rows)?;
        self.backend.set_item(&self.keys.snapshot_key, &json)
    }

    /// `Ok(None)` when nothing is stored. A corrupt snapshot is an error.
    pub fn load(&self) -> Result<Option<Vec<CatalogueItem>>, StorageError> {
        match self.backend.get_item(&self.keys.snapshot_key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn record_fetch(&self, fetched_at: &str) -> Result<(), StorageError> {
        self.backend.set_item(&self.keys.fetched_at_key, fetched_at)
    }

    pub fn last_fetch(&self) -> Result<Option<String>, StorageError> {
        self.backend.get_item(&self.keys.fetched_at_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogueDetail, Position};

    fn rows() -> Vec<CatalogueItem> {
        let detail = CatalogueDetail { height: 6, weight: 85, base_experience: Some(62) };
        vec![
            CatalogueItem::new(1, "charmander".to_string(), &detail, Position::new(51.51, -0.1)),
            CatalogueItem::new(2, "charmeleon".to_string(), &detail, Position::new(51.49, -0.08)),
        ]
    }

    fn store() -> SnapshotStore<MemoryStore> {
        SnapshotStore::new(MemoryStore::default(), StorageKeys::default())
    }

    #[test]
    fn test_save_then_load() {
        let store = store();
        assert!(store.load().unwrap().is_none());
        store.save(&rows()).unwrap();
        assert_eq!(store.load().unwrap(), Some(rows()));
    }

    #[test]
    fn test_invalidate_clears_both_keys() {
        let store = store();
        store.save(&rows()).unwrap();
        store.record_fetch("2026-10-16T10:00:00Z").unwrap();
        store.invalidate().unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(store.last_fetch().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let store = store();
        store.backend.set_item("catalogueSnapshot", "[{\"id\":").unwrap();
        assert!(matches!(store.load(), Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_shared_backend_sees_writes() {
        let backend: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::default());
        let a = SnapshotStore::new(backend.clone(), StorageKeys::default());
        let b = a.clone();
        a.save(&rows()).unwrap();
        assert_eq!(b.load().unwrap().map(|r| r.len()), Some(2));
        assert!(backend.get_item("catalogueSnapshot").unwrap().is_some());
    }
}
