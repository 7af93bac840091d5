//! Free-form settings stored in `config.toml`.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{success_set, success_unset};
use crate::cli::settings::{SetContext, SettingHandler, SettingScope};
use crate::core::config::{path_display, Config};
use crate::core::settings::Settings;
use crate::i18n::Translator;
use std::path::PathBuf;

/// Data-driven handler for an optional config value.
pub struct ConfigValueHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    /// Shown when the value is unset.
    default_display: fn(&Config) -> String,
    get: fn(&Config) -> Option<String>,
    set_field: fn(&mut Config, Option<String>),
}

impl SettingHandler for ConfigValueHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn scope(&self) -> SettingScope {
        SettingScope::Config
    }

    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        let value = args.join(" ");
        let value = value.trim();
        if value.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        }

        (self.set_field)(ctx.config, Some(value.to_string()));
        Ok(success_set(self.key, value))
    }

    fn unset(&self, ctx: &mut SetContext<'_>) -> String {
        (self.set_field)(ctx.config, None);
        success_unset(self.key, &(self.default_display)(ctx.config))
    }

    fn format(&self, _settings: &Settings, config: &Config, _t: &Translator) -> String {
        match (self.get)(config) {
            Some(value) => format!("  {}: {value}", self.key),
            None => format!(
                "  {}: (unset, default: {})",
                self.key,
                (self.default_display)(config)
            ),
        }
    }
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(path_display)
}

pub fn text_model_handler() -> ConfigValueHandler {
    ConfigValueHandler {
        key: "text-model",
        hint: "To set the model for chat and search, specify the model name:",
        example: "nixchat set text-model gemini-2.5-pro",
        default_display: |_| Config::default().text_model().to_string(),
        get: |c| c.text_model.clone(),
        set_field: |c, v| c.text_model = v,
    }
}

pub fn image_model_handler() -> ConfigValueHandler {
    ConfigValueHandler {
        key: "image-model",
        hint: "To set the model for /image, specify the model name:",
        example: "nixchat set image-model imagen-4.0-fast-generate-001",
        default_display: |_| Config::default().image_model().to_string(),
        get: |c| c.image_model.clone(),
        set_field: |c, v| c.image_model = v,
    }
}

pub fn base_url_handler() -> ConfigValueHandler {
    ConfigValueHandler {
        key: "base-url",
        hint: "To point at a different API root, specify the URL:",
        example: "nixchat set base-url http://localhost:8080/v1beta",
        default_display: |_| Config::default().base_url().to_string(),
        get: |c| c.base_url.clone(),
        set_field: |c, v| c.base_url = v,
    }
}

pub fn key_dir_handler() -> ConfigValueHandler {
    ConfigValueHandler {
        key: "key-dir",
        hint: "To read env.local / env.txt from another directory, specify it:",
        example: "nixchat set key-dir ~/secrets",
        default_display: |_| "current directory".to_string(),
        get: |c| path_value(&c.key_dir),
        set_field: |c, v| c.key_dir = v.map(PathBuf::from),
    }
}

pub fn data_dir_handler() -> ConfigValueHandler {
    ConfigValueHandler {
        key: "data-dir",
        hint: "To store history and settings elsewhere, specify a directory:",
        example: "nixchat set data-dir ~/.nixchat",
        default_display: |_| "platform data directory".to_string(),
        get: |c| path_value(&c.data_dir),
        set_field: |c, v| c.data_dir = v.map(PathBuf::from),
    }
}
