//! Error types for settings operations.

use std::fmt;

/// Errors that can occur when modifying settings.
#[derive(Debug)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    /// The value is not one of the accepted choices.
    InvalidChoice {
        key: &'static str,
        input: String,
        choices: &'static str,
    },
    /// The provided value could not be parsed as a boolean.
    InvalidBoolean(String),
    /// Required arguments are missing.
    MissingArgs {
        hint: &'static str,
        example: &'static str,
    },
    /// An error occurred while persisting the change.
    Persist(String),
    /// A connection setting was changed inside a running chat.
    NotLive(String),
}

impl SettingError {
    /// Print the error message to stderr with appropriate formatting.
    pub fn print(&self) {
        match self {
            SettingError::UnknownKey(key) => {
                eprintln!("❌ Unknown setting: {key}");
                eprintln!("   Run 'nixchat settings' to list available settings.");
            }
            SettingError::InvalidChoice {
                key,
                input,
                choices,
            } => {
                eprintln!("❌ Invalid value for {key}: {input}");
                eprintln!("   Expected one of: {choices}");
            }
            SettingError::InvalidBoolean(input) => {
                eprintln!("❌ Invalid boolean value: {input}");
                eprintln!("   Use 'on' or 'off' (also accepts true/false, yes/no)");
            }
            SettingError::MissingArgs { hint, example } => {
                eprintln!("⚠️  {hint}");
                eprintln!("Example: {example}");
            }
            SettingError::Persist(msg) => {
                eprintln!("❌ Failed to save setting: {msg}");
            }
            SettingError::NotLive(key) => {
                eprintln!("❌ {key} cannot be changed inside a chat");
                eprintln!("   Run 'nixchat set {key} <value>' and start a new chat.");
            }
        }
    }

    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SettingError::MissingArgs { .. } => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => write!(f, "Unknown setting: {key}"),
            SettingError::InvalidChoice { key, input, .. } => {
                write!(f, "Invalid value for {key}: {input}")
            }
            SettingError::InvalidBoolean(input) => write!(f, "Invalid boolean value: {input}"),
            SettingError::MissingArgs { hint, .. } => write!(f, "{hint}"),
            SettingError::Persist(msg) => write!(f, "Persist error: {msg}"),
            SettingError::NotLive(key) => write!(f, "{key} cannot be changed inside a chat"),
        }
    }
}

impl std::error::Error for SettingError {}
