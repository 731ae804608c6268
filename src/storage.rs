//! Local key-value state (recent profiles, collapsed groups).
//!
//! Values are whole JSON documents stored under a string key and always
//! rewritten as a whole. Concurrent writers can lose each other's update;
//! callers accept that for this kind of UI state.

use par_term_config::{Config, write_atomic};
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// String-keyed, string-valued local storage.
///
/// Implementations never fail from the caller's point of view: write
/// errors are logged and the in-memory value still updates.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// Volatile store, used by tests and hosts without a state file
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.lock().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.lock().remove(key);
    }
}

/// Store persisted as a single JSON object file.
///
/// The file is read once when opened; every mutation rewrites it atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the state file at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed state file {:?}: {}", path, e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Failed to read state file {:?}: {}", path, e);
                BTreeMap::new()
            }
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Open the state file next to the default config file
    pub fn open_default() -> Self {
        Self::open(Config::state_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) {
        let result = serde_json::to_vec_pretty(values)
            .map_err(|e| e.to_string())
            .and_then(|bytes| write_atomic(&self.path, &bytes).map_err(|e| e.to_string()));
        if let Err(e) = result {
            log::warn!("Failed to write state file {:?}: {}", self.path, e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value);
        self.persist(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.lock();
        if values.remove(key).is_some() {
            self.persist(&values);
        }
    }
}

/// Read and decode a JSON value, falling back to `T::default()` when the key
/// is absent or holds malformed data.
pub fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Discarding malformed '{}' state: {}", key, e);
        T::default()
    })
}

/// Encode and store a JSON value
pub fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T)
where
    T: Serialize + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, raw),
        Err(e) => log::error!("Failed to encode '{}' state: {}", key, e),
    }
}
