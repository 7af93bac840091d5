use crate::api::gemini::{DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of `config.toml`. Every field is optional; accessors fall back
/// to built-in defaults.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Model used for text, voice and grounded search requests
    pub text_model: Option<String>,
    /// Model used for `/image`
    pub image_model: Option<String>,
    /// API root, e.g. a proxy in front of the Gemini endpoint
    pub base_url: Option<String>,
    /// Directory holding `env.local` / `env.txt`
    pub key_dir: Option<PathBuf>,
    /// Directory for chat history and settings
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Key directory, defaulting to the current working directory.
    pub fn key_dir(&self) -> PathBuf {
        self.key_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths under `$HOME` to `~` notation on Unix-like systems
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
