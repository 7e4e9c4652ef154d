//! Session-scoped key/value storage.
//!
//! The only persisted value is the list of resume skills, stored as a JSON
//! array under [`SKILLS_STORAGE_KEY`](crate::config::SKILLS_STORAGE_KEY).
//! It lives in the browser's `sessionStorage`, so it is gone when the tab closes.

use std::collections::HashMap;

use crate::console;
use crate::error::StoreError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// `window.sessionStorage`.
#[cfg(target_arch = "wasm32")]
pub struct SessionStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl SessionStore {
    pub fn open() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}

/// Read the stored skill list.
///
/// `Ok(None)` when nothing was stored this session. A value that is not a JSON
/// string array is discarded (and removed) rather than surfaced.
pub fn load_skills(
    store: &mut dyn KeyValueStore,
    key: &str,
) -> Result<Option<Vec<String>>, StoreError> {
    let Some(json) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Vec<String>>(&json) {
        Ok(skills) => Ok(Some(skills)),
        Err(e) => {
            console::warn(&format!("stored skills are unreadable, discarding: {e}"));
            store.remove(key)?;
            Ok(None)
        }
    }
}

pub fn save_skills(
    store: &mut dyn KeyValueStore,
    key: &str,
    skills: &[String],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(skills)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "resumeSkills";

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_key_loads_none() {
        let mut store = MemoryStore::new();
        assert_eq!(load_skills(&mut store, KEY).unwrap(), None);
    }

    #[test]
    fn saved_skills_are_a_json_array() {
        let mut store = MemoryStore::new();
        save_skills(&mut store, KEY, &skills(&["react", "user experience"])).unwrap();
        assert_eq!(
            store.get(KEY).unwrap().as_deref(),
            Some(r#"["react","user experience"]"#)
        );
        assert_eq!(
            load_skills(&mut store, KEY).unwrap(),
            Some(skills(&["react", "user experience"]))
        );
    }

    #[test]
    fn empty_list_is_still_stored() {
        let mut store = MemoryStore::new();
        save_skills(&mut store, KEY, &[]).unwrap();
        assert_eq!(load_skills(&mut store, KEY).unwrap(), Some(vec![]));
    }

    #[test]
    fn corrupt_value_is_discarded() {
        let mut store = MemoryStore::new();
        store.set(KEY, "{not json").unwrap();
        assert_eq!(load_skills(&mut store, KEY).unwrap(), None);
        assert_eq!(store.get(KEY).unwrap(), None);
    }

    #[test]
    fn wrong_shape_is_discarded() {
        let mut store = MemoryStore::new();
        store.set(KEY, r#"{"skills":["react"]}"#).unwrap();
        assert_eq!(load_skills(&mut store, KEY).unwrap(), None);
    }
}
