//! Key/value persistence for chat history and settings.
//!
//! Each storage key is one `<key>.json` file in the data directory. Writes
//! go through a temp file in the same directory and are renamed into place.

use crate::core::session::ChatSession;
use crate::core::settings::Settings;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub const HISTORY_KEY: &str = "chatHistory";
pub const SETTINGS_KEY: &str = "appSettings";

#[derive(Debug)]
pub enum StoreError {
    /// No platform data directory could be determined.
    NoDataDir,
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NoDataDir => write!(f, "Could not determine a data directory"),
            StoreError::Io { path, source } => {
                write!(f, "Storage I/O failed at {}: {source}", path.display())
            }
            StoreError::Serialize { key, source } => {
                write!(f, "Failed to serialize '{key}': {source}")
            }
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StoreError::NoDataDir => None,
            StoreError::Io { source, .. } => Some(source),
            StoreError::Serialize { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform data directory for nixchat.
    pub fn default_dir() -> Result<PathBuf, StoreError> {
        ProjectDirs::from("org", "nixchat", "nixchat")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StoreError::NoDataDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let mut temp_file = NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        temp_file.write_all(value.as_bytes()).map_err(io_err)?;
        temp_file.as_file_mut().sync_all().map_err(io_err)?;
        temp_file.persist(&path).map_err(|err| io_err(err.error))?;
        debug!(key, "stored item");
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Reads and parses a JSON item. A malformed item is logged, removed,
    /// and reported as absent.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(contents) = self.get_item(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(key, error = %err, "discarding malformed stored data");
                self.remove_item(key)?;
                Ok(None)
            }
        }
    }

    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let contents = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.set_item(key, &contents)
    }

    /// Stored sessions, newest first.
    pub fn load_history(&self) -> Result<Vec<ChatSession>, StoreError> {
        Ok(self.load_json(HISTORY_KEY)?.unwrap_or_default())
    }

    pub fn save_history(&self, sessions: &[ChatSession]) -> Result<(), StoreError> {
        self.save_json(HISTORY_KEY, sessions)
    }

    pub fn clear_history(&self) -> Result<(), StoreError> {
        self.remove_item(HISTORY_KEY)
    }

    pub fn load_settings(&self) -> Result<Settings, StoreError> {
        Ok(self.load_json(SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.save_json(SETTINGS_KEY, settings)
    }
}
