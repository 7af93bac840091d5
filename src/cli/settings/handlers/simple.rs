//! Handlers for settings with a fixed set of choices.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{success_set, success_unset};
use crate::cli::settings::{SetContext, SettingHandler, SettingScope};
use crate::core::config::Config;
use crate::core::settings::{Settings, Theme};
use crate::i18n::{Language, LocaleKey, Translator};

/// Handler for the `theme` setting.
pub struct ThemeHandler;

impl SettingHandler for ThemeHandler {
    fn key(&self) -> &'static str {
        "theme"
    }

    fn scope(&self) -> SettingScope {
        SettingScope::App
    }

    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set a theme, specify light or dark:",
                example: "nixchat set theme light",
            });
        }

        let input = args.join(" ");
        let theme = Theme::parse(&input).ok_or(SettingError::InvalidChoice {
            key: "theme",
            input,
            choices: "light, dark",
        })?;
        ctx.settings.theme = theme;
        Ok(success_set("theme", theme.as_str()))
    }

    fn unset(&self, ctx: &mut SetContext<'_>) -> String {
        let default = Settings::default().theme;
        ctx.settings.theme = default;
        success_unset("theme", default.as_str())
    }

    fn format(&self, settings: &Settings, _config: &Config, t: &Translator) -> String {
        format!(
            "  theme: {} ({}: {})",
            settings.theme,
            t.t(LocaleKey::Theme),
            t.t(settings.theme.label_key())
        )
    }
}

/// Handler for the `language` setting.
pub struct LanguageHandler;

impl SettingHandler for LanguageHandler {
    fn key(&self) -> &'static str {
        "language"
    }

    fn scope(&self) -> SettingScope {
        SettingScope::App
    }

    fn set(&self, args: &[String], ctx: &mut SetContext<'_>) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set the interface language, specify a language code:",
                example: "nixchat set language ar",
            });
        }

        let input = args.join(" ");
        let language = Language::from_code(&input).ok_or(SettingError::InvalidChoice {
            key: "language",
            input,
            choices: "en, ar",
        })?;
        ctx.settings.language = language;
        Ok(success_set("language", language.code()))
    }

    fn unset(&self, ctx: &mut SetContext<'_>) -> String {
        let default = Settings::default().language;
        ctx.settings.language = default;
        success_unset("language", default.code())
    }

    fn format(&self, settings: &Settings, _config: &Config, t: &Translator) -> String {
        format!(
            "  language: {} ({}: {})",
            settings.language,
            t.t(LocaleKey::Language),
            t.t(settings.language.label_key())
        )
    }
}
