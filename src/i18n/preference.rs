//! Persisted language preference.
//!
//! The preference is a single language code kept under a well-known key.
//! Absent, unreadable or malformed values all mean "not set"; only writes
//! report errors, and the translation service downgrades those to warnings.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Storage key under which the language code is persisted.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// Persistent storage for the user's language choice.
pub trait PreferenceStore: Send + Sync {
    /// The stored code, if one has been saved and can be read.
    fn load(&self) -> Option<String>;

    /// Persist `code`, replacing any previous value.
    fn save(&self, code: &str) -> Result<()>;
}

/// In-process store, used by tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a value already stored.
    pub fn with_value(code: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(code.into())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value
            .lock()
            .map(|value| value.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn save(&self, code: &str) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *value = Some(code.to_string());
        Ok(())
    }
}

/// JSON file store: `{ "language": "nl" }`.
///
/// Other keys in the file are preserved on save, so the file can be shared
/// with other client-side preferences.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Option<Map<String, Value>> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) | Err(_) => {
                debug!(
                    "Ignoring malformed preference file {}",
                    self.path.display()
                );
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        self.read_document()?
            .get(LANGUAGE_PREFERENCE_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn save(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preference directory {}", parent.display())
            })?;
        }

        let mut document = self.read_document().unwrap_or_default();
        document.insert(
            LANGUAGE_PREFERENCE_KEY.to_string(),
            Value::String(code.to_string()),
        );

        let json = serde_json::to_string_pretty(&Value::Object(document))?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preference file {}", self.path.display()))?;
        Ok(())
    }
}
