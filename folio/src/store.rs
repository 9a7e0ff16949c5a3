//! Theme preference storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolution logic only sees [`PreferenceStore`]. The browser client plugs in
//! `localStorage`, the server seeds a [`MemoryStore`] from the request cookie,
//! and the CLI uses a [`FileStore`] on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::theme::{THEME_KEY, Theme, ThemePreference};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Error returned by a [`PreferenceStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend exists conceptually but cannot be reached (disabled
    /// storage, no browser window, and so on).
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("preference file {0} does not hold a JSON object")]
    NotAnObject(PathBuf),
}

/// Single-key durable storage for the theme preference.
///
/// The setter takes a [`Theme`], so an `Unset` value can never be written.
pub trait PreferenceStore {
    /// Read the persisted preference.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn get_preference(&self) -> Result<ThemePreference, StoreError>;

    /// Persist `theme` as the user's preference.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be written.
    fn set_preference(&mut self, theme: Theme) -> Result<(), StoreError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get_preference(&self) -> Result<ThemePreference, StoreError> {
        (**self).get_preference()
    }

    fn set_preference(&mut self, theme: Theme) -> Result<(), StoreError> {
        (**self).set_preference(theme)
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process store. Survives only as long as the value does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    preference: ThemePreference,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-known preference (e.g. parsed from a cookie).
    #[must_use]
    pub fn seeded(preference: ThemePreference) -> Self {
        Self { preference }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_preference(&self) -> Result<ThemePreference, StoreError> {
        Ok(self.preference)
    }

    fn set_preference(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.preference = theme.into();
        Ok(())
    }
}

// =============================================================================
// UNAVAILABLE
// =============================================================================

/// Store that can never be read or written.
#[derive(Clone, Debug, Default)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl PreferenceStore for UnavailableStore {
    fn get_preference(&self) -> Result<ThemePreference, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }

    fn set_preference(&mut self, _theme: Theme) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

// =============================================================================
// FILE
// =============================================================================

/// JSON object file holding the `"theme"` key.
///
/// A missing file reads as `Unset`. Other keys in the object are kept intact
/// when the preference is written.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path for write-then-rename: the full file name plus `.tmp`.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_object(&self) -> Result<Map<String, Value>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::NotAnObject(self.path.clone())),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get_preference(&self) -> Result<ThemePreference, StoreError> {
        let map = self.read_object()?;
        let raw = map.get(THEME_KEY).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        Ok(ThemePreference::parse(raw.as_deref()))
    }

    fn set_preference(&mut self, theme: Theme) -> Result<(), StoreError> {
        let mut map = self.read_object()?;
        map.insert(THEME_KEY.to_owned(), Value::String(theme.as_str().to_owned()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&Value::Object(map))?;
        // Write-then-rename keeps the single key atomic on the same filesystem.
        let tmp = self.tmp_path();
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
