//! Local persistence helpers for user preferences.
//!
//! Web builds keep a JSON blob in `localStorage`; native builds write a JSON file
//! into the platform config directory. Registration data is never persisted.

use thiserror::Error;

use super::preferences::Preferences;

#[cfg(target_arch = "wasm32")]
const PREFERENCES_KEY: &str = "carematch.preferences";

#[cfg(not(target_arch = "wasm32"))]
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no storage backend available")]
    Unavailable,
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored preferences are invalid: {0}")]
    Format(#[from] serde_json::Error),
}

/// Load saved preferences. `Ok(None)` when nothing has been saved yet.
pub fn load_preferences() -> Result<Option<Preferences>, StorageError> {
    match read_raw()? {
        Some(raw) => decode(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn save_preferences(preferences: &Preferences) -> Result<(), StorageError> {
    let raw = serde_json::to_string(preferences)?;
    write_raw(&raw)
}

fn decode(raw: &str) -> Result<Preferences, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(PREFERENCES_KEY)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(PREFERENCES_KEY, raw)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
fn preferences_path() -> Result<std::path::PathBuf, StorageError> {
    directories::ProjectDirs::from("jp", "CareMatch", "CareMatch")
        .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
        .ok_or(StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Result<Option<String>, StorageError> {
    read_file(&preferences_path()?)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    write_file(&preferences_path()?, raw)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: &std::path::Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_file(path: &std::path::Path, raw: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, raw)?;
    Ok(())
}
