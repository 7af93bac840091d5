//! Boolean setting handlers for on/off settings.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{format_bool, parse_bool, success_set, success_unset};
use crate::cli::settings::{SetContext, SettingHandler, SettingScope};
use crate::core::config::Config;
use crate::core::settings::Settings;
use crate::i18n::{LocaleKey, Translator};

/// Data-driven handler for boolean (on/off) app settings.
pub struct BooleanHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    label: LocaleKey,
    description: LocaleKey,
    get: fn(&Settings) -> bool,
    set_field: fn(&mut Settings, bool),
}

impl SettingHandler for BooleanHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn scope(&self) -> SettingScope {
        SettingScope::App
    }

    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        }

        let input = args.join(" ");
        let value = parse_bool(&input).ok_or(SettingError::InvalidBoolean(input))?;
        (self.set_field)(ctx.settings, value);
        Ok(success_set(self.key, format_bool(value)))
    }

    fn unset(&self, ctx: &mut SetContext<'_>) -> String {
        let default = (self.get)(&Settings::default());
        (self.set_field)(ctx.settings, default);
        success_unset(self.key, format_bool(default))
    }

    fn format(&self, settings: &Settings, _config: &Config, t: &Translator) -> String {
        format!(
            "  {}: {} ({}. {})",
            self.key,
            format_bool((self.get)(settings)),
            t.t(self.label),
            t.t(self.description)
        )
    }
}

/// Create a handler for the `save-history` setting.
pub fn save_history_handler() -> BooleanHandler {
    BooleanHandler {
        key: "save-history",
        hint: "To keep or stop saving chat history, specify on or off:",
        example: "nixchat set save-history off",
        label: LocaleKey::SaveChatHistory,
        description: LocaleKey::SaveHistoryDescription,
        get: |s| s.save_history,
        set_field: |s, v| s.save_history = v,
    }
}
