
//! The persisted unit preference.
//!
//! Parsing and formatting never consult this module; callers load the
//! preference once and pass the resulting [`UnitMode`] explicitly.

mod store;

pub use store::{KeyValueStore, MemoryStore, JsonFileStore};

use crate::units::UnitMode;

use log::{debug, warn};
use thiserror::Error;

use std::io;

/// Key under which the unit preference is stored.
pub const UNITS_KEY: &str = "cc.units";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrefsError {
  #[error("{0}")]
  Io(#[from] io::Error),
  #[error("{0}")]
  Json(#[from] serde_json::Error),
}

/// Reads the unit preference. A missing, unrecognised or unreadable
/// value falls back to the default mode.
pub fn load_unit_mode<S>(store: &S) -> UnitMode
where S: KeyValueStore + ?Sized {
  match store.get(UNITS_KEY) {
    Ok(Some(stored)) => stored.parse::<UnitMode>().unwrap_or_else(|err| {
      warn!("Ignoring stored unit preference: {}", err);
      UnitMode::default()
    }),
    Ok(None) => UnitMode::default(),
    Err(err) => {
      warn!("Could not read unit preference: {}", err);
      UnitMode::default()
    }
  }
}

pub fn store_unit_mode<S>(store: &mut S, mode: UnitMode) -> Result<(), PrefsError>
where S: KeyValueStore + ?Sized {
  debug!("Storing unit preference '{}'", mode);
  store.set(UNITS_KEY, mode.as_str())
}
