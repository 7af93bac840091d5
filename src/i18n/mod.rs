//! Localized strings and placeholder substitution.
//!
//! Every user-facing string lives behind a [`LocaleKey`]. Each locale module
//! provides an exhaustive table, so adding a key without translating it is a
//! compile error rather than a runtime fallback.

mod ar;
mod en;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    /// English name of the language, used when instructing the model which
    /// language to answer in.
    pub fn english_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "Arabic",
        }
    }

    /// Key of the language's display name in the active locale.
    pub fn label_key(self) -> LocaleKey {
        match self {
            Language::En => LocaleKey::English,
            Language::Ar => LocaleKey::Arabic,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleKey {
    AppTitle,
    ChatHistory,
    NewChat,
    Settings,
    ClearHistory,
    WelcomeMessage,
    ChatPlaceholder,
    ErrorPrefix,
    Theme,
    Light,
    Dark,
    Language,
    English,
    Arabic,
    SaveChatHistory,
    SaveHistoryDescription,
    HelpCommandName,
    HelpCommandDescription,
    ImageCommandName,
    ImageCommandDescription,
    VoiceCommandName,
    VoiceCommandDescription,
    JokeCommandName,
    JokeCommandDescription,
    StoryCommandName,
    StoryCommandDescription,
    SearchCommandName,
    SearchCommandDescription,
    DeepresearchCommandName,
    DeepresearchCommandDescription,
    ArticleCommandName,
    ArticleCommandDescription,
    RoleCommandName,
    RoleCommandDescription,
    ClearCommandName,
    ClearCommandDescription,
    DefaultSystemInstruction,
    HelpMessage,
    ImagePromptMissing,
    VoicePromptMissing,
    SearchQueryMissing,
    ResearchTopicMissing,
    ArticleTopicMissing,
    JokePrompt,
    StoryPrompt,
    StoryTopicPrompt,
    DeepResearchPrompt,
    ArticleSystemInstruction,
    RoleSetConfirmation,
    UnexpectedError,
    ConfirmClearHistory,
}

/// Resolves [`LocaleKey`]s for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: LocaleKey) -> &'static str {
        match self.language {
            Language::En => en::lookup(key),
            Language::Ar => ar::lookup(key),
        }
    }

    /// Looks up `key` and replaces `{0}`, `{1}`, … with `args` in order.
    pub fn format(&self, key: LocaleKey, args: &[&str]) -> String {
        substitute(self.t(key), args)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Replaces every `{i}` placeholder in `template` with `args[i]`.
///
/// Placeholders without a matching argument are left untouched.
pub fn substitute(template: &str, args: &[&str]) -> String {
    let mut output = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        output = output.replace(&format!("{{{index}}}"), arg);
    }
    output
}
