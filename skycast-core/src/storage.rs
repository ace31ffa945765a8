//! The persistence slot that carries the city name from the home screen to
//! the weather screen.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde_json::Value;
use std::{collections::BTreeMap, fs, path::PathBuf};

/// Fixed key under which the city name is stored.
pub const CITY_KEY: &str = "city";

/// Get/set contract for the persisted city name.
pub trait CityStore {
    /// The stored value, or `None` if nothing was ever written.
    fn city(&self) -> Result<Option<String>>;

    /// Replace the stored value. Must be durable once this returns.
    fn set_city(&mut self, city: &str) -> Result<()>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    city: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(city: impl Into<String>) -> Self {
        Self { city: Some(city.into()), writes: 0 }
    }

    /// Number of successful `set_city` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CityStore for MemoryStore {
    fn city(&self) -> Result<Option<String>> {
        Ok(self.city.clone())
    }

    fn set_city(&mut self, city: &str) -> Result<()> {
        self.city = Some(city.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// A JSON object of named entries on disk.
///
/// Only the `city` entry is used. Other entries, whatever their type, are
/// left untouched when writing.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store file in the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("storage.json"))
    }

    fn read_entries(&self) -> Result<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {}", self.path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse storage file: {}", self.path.display()))
    }
}

impl CityStore for FileStore {
    fn city(&self) -> Result<Option<String>> {
        match self.read_entries()?.remove(CITY_KEY) {
            Some(Value::String(city)) => Ok(Some(city)),
            _ => Ok(None),
        }
    }

    fn set_city(&mut self, city: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(CITY_KEY.to_string(), Value::String(city.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize storage entries")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write storage file: {}", self.path.display()))?;

        Ok(())
    }
}
