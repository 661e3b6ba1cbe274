
use super::PrefsError;

use serde_json::{Map, Value};

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A string key-value store owned by the surrounding application.
pub trait KeyValueStore {
  /// Looks up `key`. Missing keys are `Ok(None)`.
  fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

  fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: HashMap<String, String>,
}

/// Store backed by a JSON object in a file. The whole file is
/// rewritten on every [`KeyValueStore::set`]. Entries with non-string
/// values are preserved but read as missing.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
  entries: Map<String, Value>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
    self.entries.insert(key.to_owned(), value.to_owned());
    Ok(())
  }
}

impl JsonFileStore {
  /// Loads the store at `path`. A missing file is an empty store; the
  /// file is created on the first write.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
    let path = path.into();
    let entries = match fs::read_to_string(&path) {
      Ok(text) => serde_json::from_str(&text)?,
      Err(err) if err.kind() == io::ErrorKind::NotFound => Map::new(),
      Err(err) => return Err(err.into()),
    };
    Ok(Self { path, entries })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn flush(&self) -> Result<(), PrefsError> {
    let text = serde_json::to_string_pretty(&self.entries)?;
    fs::write(&self.path, text)?;
    Ok(())
  }
}

impl KeyValueStore for JsonFileStore {
  fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
    Ok(self.entries.get(key).and_then(Value::as_str).map(str::to_owned))
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
    self.entries.insert(key.to_owned(), Value::String(value.to_owned()));
    self.flush()
  }
}
