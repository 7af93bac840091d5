//! Settings management for the `set`, `unset` and `settings` commands.
//!
//! Two stores sit behind one key space:
//!
//! - App settings (`theme`, `language`, `save-history`) live in the data
//!   directory alongside chat history.
//! - Connection settings (`text-model`, `image-model`, `base-url`,
//!   `key-dir`, `data-dir`) live in `config.toml`.

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::Config;
use crate::core::settings::Settings;
use crate::i18n::Translator;

/// Which file a handler writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingScope {
    App,
    Config,
}

/// Mutable snapshot handed to setting handlers. The caller persists the
/// side named by the handler's [`SettingScope`].
pub struct SetContext<'a> {
    pub settings: &'a mut Settings,
    pub config: &'a mut Config,
}

/// Trait for handling a single setting key.
pub trait SettingHandler: Send + Sync {
    /// Returns the key this handler manages.
    fn key(&self) -> &'static str;

    fn scope(&self) -> SettingScope;

    /// Set the value from the words after the key.
    ///
    /// # Returns
    /// A success message to display, or an error.
    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError>;

    /// Restore the default value.
    fn unset(&self, ctx: &mut SetContext<'_>) -> String;

    /// Format the current value for display in `nixchat settings` output,
    /// with labels in the active locale.
    fn format(&self, settings: &Settings, config: &Config, t: &Translator) -> String;
}
