use crate::errors::StoreError;
use crate::models::DailyState;
use std::collections::BTreeMap;
use std::{env, fs, path::PathBuf};
use tracing::warn;

/// String-keyed persistent store scoped to the host.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub fn load_state<S: StateStore>(store: &S, key: &str) -> Option<DailyState> {
    let raw = store.get(key)?;
    match serde_json::from_str::<DailyState>(&raw) {
        Ok(state) if state.word.is_empty() => {
            warn!("stored focus state under {key} has no word, treating as absent");
            None
        }
        Ok(state) => Some(state),
        Err(err) => {
            warn!("failed to parse stored focus state: {err}");
            None
        }
    }
}

pub fn save_state<S: StateStore>(store: &mut S, key: &str, state: &DailyState) {
    match serde_json::to_string(state) {
        Ok(raw) => {
            if let Err(err) = store.set(key, &raw) {
                warn!("failed to save focus state: {err}");
            }
        }
        Err(err) => warn!("failed to serialize focus state: {err}"),
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Local-storage analog backed by a single JSON file holding the key map.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Self {
        let entries: BTreeMap<String, String> = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("failed to parse store file: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!("failed to read store file: {err}");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        let payload = serde_json::to_vec_pretty(&self.entries).map_err(StoreError::new)?;
        fs::write(&self.path, payload).map_err(StoreError::new)?;
        Ok(())
    }
}

pub fn resolve_store_path() -> PathBuf {
    match env::var("BLINK_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/blink.json"),
    }
}
