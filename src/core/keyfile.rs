//! API key discovery from plain-text key files.
//!
//! The key lives in `env.local` or `env.txt` as a `GEMINI_API_KEY=<value>`
//! line. A file holding a single bare line without `=` is also accepted.

use async_trait::async_trait;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use tokio::sync::OnceCell;
use tracing::debug;

pub const KEY_VARIABLE: &str = "GEMINI_API_KEY";
/// Files searched for the key, in order.
pub const KEY_FILES: [&str; 2] = ["env.local", "env.txt"];

/// Extracts the API key from key-file contents.
pub fn parse_key_file(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    for line in &lines {
        if let Some(value) = line
            .strip_prefix(KEY_VARIABLE)
            .and_then(|rest| rest.strip_prefix('='))
        {
            let value = value.trim();
            return (!value.is_empty()).then(|| value.to_string());
        }
    }

    match lines.as_slice() {
        [only] if !only.contains('=') => Some((*only).to_string()),
        _ => None,
    }
}

#[derive(Debug)]
pub enum KeyError {
    /// None of the key files yielded a key.
    NotFound { searched: Vec<String> },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::NotFound { searched } => {
                let files = searched
                    .iter()
                    .map(|file| format!("'{file}'"))
                    .collect::<Vec<_>>()
                    .join(" or ");
                write!(
                    f,
                    "API Key not found. Create {files} and add your key as '{KEY_VARIABLE}=YOUR_API_KEY'."
                )
            }
        }
    }
}

impl Error for KeyError {}

/// Where key files are read from.
#[async_trait]
pub trait KeySource: Send + Sync {
    /// Returns the contents of the named key file, or `None` when it cannot
    /// be read.
    async fn fetch(&self, name: &str) -> Option<String>;

    /// Human-readable location of the named key file, used in errors.
    fn describe(&self, name: &str) -> String;
}

/// Reads key files from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileKeySource {
    root: PathBuf,
}

impl FileKeySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl KeySource for FileKeySource {
    async fn fetch(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "key file not readable");
                None
            }
        }
    }

    fn describe(&self, name: &str) -> String {
        self.root.join(name).display().to_string()
    }
}

/// Resolves the API key once and caches it.
///
/// Concurrent first callers wait on the same in-flight resolution. A failed
/// resolution is not cached, so a key file created later is picked up by the
/// next call.
pub struct KeyResolver {
    source: Box<dyn KeySource>,
    key: OnceCell<String>,
}

impl KeyResolver {
    pub fn new(source: impl KeySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            key: OnceCell::new(),
        }
    }

    /// A resolver that never touches a key source.
    #[cfg(test)]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            source: Box::new(FileKeySource::new(".")),
            key: OnceCell::new_with(Some(key.into())),
        }
    }

    pub async fn resolve(&self) -> Result<&str, KeyError> {
        self.key
            .get_or_try_init(|| self.fetch_key())
            .await
            .map(String::as_str)
    }

    pub fn is_resolved(&self) -> bool {
        self.key.initialized()
    }

    async fn fetch_key(&self) -> Result<String, KeyError> {
        for name in KEY_FILES {
            let Some(text) = self.source.fetch(name).await else {
                continue;
            };
            if let Some(key) = parse_key_file(&text) {
                debug!(file = name, "resolved API key");
                return Ok(key);
            }
        }
        Err(KeyError::NotFound {
            searched: KEY_FILES
                .iter()
                .map(|name| self.source.describe(name))
                .collect(),
        })
    }
}

impl fmt::Debug for KeyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyResolver")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
