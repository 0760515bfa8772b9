// src/settings.rs

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::errors::SettingsError;

/// Key/value persistence for opaque byte blobs.
///
/// Values staged with [`SettingsStore::set_value`] only reach the backing
/// storage on [`SettingsStore::sync`].
pub trait SettingsStore {
    /// Returns the value stored under `key`, or `None` if it was never written.
    fn value(&self, key: &str) -> Option<Vec<u8>>;

    fn set_value(&mut self, key: &str, value: Vec<u8>);

    /// Flushes all staged values to the backing storage.
    fn sync(&mut self) -> Result<(), SettingsError>;
}

/// Settings kept in a JSON file under the user's configuration directory.
///
/// The file lives at `<config dir>/<organization>/<application>.json`.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    values: BTreeMap<String, Vec<u8>>,
}

impl FileSettings {
    /// Opens the settings for the given organization/application pair.
    pub fn open(organization: &str, application: &str) -> Result<Self, SettingsError> {
        Self::open_in(dirs::config_dir(), organization, application)
    }

    /// Opens the settings under `config_dir`, failing when there is none.
    pub fn open_in(
        config_dir: Option<PathBuf>,
        organization: &str,
        application: &str,
    ) -> Result<Self, SettingsError> {
        let config_dir = config_dir.ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::at(
            config_dir
                .join(organization)
                .join(format!("{application}.json")),
        ))
    }

    /// Opens the settings backed by an explicit file path.
    ///
    /// A missing or unreadable file yields an empty store.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::load(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Failed to read settings from {:?}, using defaults: {}", path, e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, Vec<u8>>, SettingsError> {
        if !path.exists() {
            tracing::debug!("Settings file {:?} not found, starting empty.", path);
            return Ok(BTreeMap::new());
        }
        let json = std::fs::read_to_string(path)?;
        let values = serde_json::from_str(&json)?;
        tracing::debug!("Loaded settings from {:?}", path);
        Ok(values)
    }
}

impl SettingsStore for FileSettings {
    fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: Vec<u8>) {
        self.values.insert(key.to_string(), value);
    }

    fn sync(&mut self) -> Result<(), SettingsError> {
        let dir = self.path.parent().ok_or_else(|| SettingsError::InvalidValue {
            key: self.path.display().to_string(),
            reason: "settings path has no parent directory".to_string(),
        })?;
        std::fs::create_dir_all(dir)?;

        // Write to a sibling file first so a crash never leaves a truncated file behind
        let temp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Settings written to {:?}", self.path);
        Ok(())
    }
}

/// Settings that never leave memory. Counts flushes so callers can observe writes.
#[derive(Debug, Default, Clone)]
pub struct MemorySettings {
    values: BTreeMap<String, Vec<u8>>,
    sync_count: usize,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`SettingsStore::sync`] has been called.
    pub fn sync_count(&self) -> usize {
        self.sync_count
    }
}

impl SettingsStore for MemorySettings {
    fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: Vec<u8>) {
        self.values.insert(key.to_string(), value);
    }

    fn sync(&mut self) -> Result<(), SettingsError> {
        self.sync_count += 1;
        Ok(())
    }
}

/// A store that may be absent. Without one, nothing is read and nothing is written.
impl<S: SettingsStore> SettingsStore for Option<S> {
    fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.as_ref().and_then(|store| store.value(key))
    }

    fn set_value(&mut self, key: &str, value: Vec<u8>) {
        if let Some(store) = self {
            store.set_value(key, value);
        }
    }

    fn sync(&mut self) -> Result<(), SettingsError> {
        match self {
            Some(store) => store.sync(),
            None => {
                tracing::debug!("No settings store, skipping write.");
                Ok(())
            }
        }
    }
}
