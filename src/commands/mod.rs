//! Slash-command identifiers, parsing, and the localized command table.
//!
//! Commands are typed as `/<word> <args>`. The word may be spelled in the
//! active locale (`/صورة`) or in canonical English (`/image`); both resolve
//! to the same [`CommandId`].

mod registry;

pub use registry::{all_commands, matching_commands, Command, CommandMap};

use crate::i18n::{LocaleKey, Translator};
use regex::Regex;
use std::sync::LazyLock;

static INVOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^/(\S+)\s*(.*)").expect("invocation pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    Image,
    Voice,
    Joke,
    Story,
    Search,
    DeepResearch,
    Article,
    Role,
    Clear,
}

impl CommandId {
    /// Table order shown to users.
    pub const ALL: [CommandId; 10] = [
        CommandId::Help,
        CommandId::Image,
        CommandId::Voice,
        CommandId::Joke,
        CommandId::Story,
        CommandId::Search,
        CommandId::DeepResearch,
        CommandId::Article,
        CommandId::Role,
        CommandId::Clear,
    ];

    /// Commands routed through the prompt dispatcher. `Role` and `Clear`
    /// mutate the session and are handled by the chat controller instead.
    pub const DISPATCHED: [CommandId; 8] = [
        CommandId::Image,
        CommandId::Voice,
        CommandId::Help,
        CommandId::Joke,
        CommandId::Story,
        CommandId::Search,
        CommandId::DeepResearch,
        CommandId::Article,
    ];

    pub fn canonical(self) -> &'static str {
        match self {
            CommandId::Help => "help",
            CommandId::Image => "image",
            CommandId::Voice => "voice",
            CommandId::Joke => "joke",
            CommandId::Story => "story",
            CommandId::Search => "search",
            CommandId::DeepResearch => "deepresearch",
            CommandId::Article => "article",
            CommandId::Role => "role",
            CommandId::Clear => "clear",
        }
    }

    pub fn name_key(self) -> LocaleKey {
        match self {
            CommandId::Help => LocaleKey::HelpCommandName,
            CommandId::Image => LocaleKey::ImageCommandName,
            CommandId::Voice => LocaleKey::VoiceCommandName,
            CommandId::Joke => LocaleKey::JokeCommandName,
            CommandId::Story => LocaleKey::StoryCommandName,
            CommandId::Search => LocaleKey::SearchCommandName,
            CommandId::DeepResearch => LocaleKey::DeepresearchCommandName,
            CommandId::Article => LocaleKey::ArticleCommandName,
            CommandId::Role => LocaleKey::RoleCommandName,
            CommandId::Clear => LocaleKey::ClearCommandName,
        }
    }

    pub fn description_key(self) -> LocaleKey {
        match self {
            CommandId::Help => LocaleKey::HelpCommandDescription,
            CommandId::Image => LocaleKey::ImageCommandDescription,
            CommandId::Voice => LocaleKey::VoiceCommandDescription,
            CommandId::Joke => LocaleKey::JokeCommandDescription,
            CommandId::Story => LocaleKey::StoryCommandDescription,
            CommandId::Search => LocaleKey::SearchCommandDescription,
            CommandId::DeepResearch => LocaleKey::DeepresearchCommandDescription,
            CommandId::Article => LocaleKey::ArticleCommandDescription,
            CommandId::Role => LocaleKey::RoleCommandDescription,
            CommandId::Clear => LocaleKey::ClearCommandDescription,
        }
    }

    /// Localized name including the leading slash, e.g. `/صورة`.
    pub fn localized_name(self, t: &Translator) -> &'static str {
        t.t(self.name_key())
    }

    /// Localized name without the leading slash.
    pub fn localized_word(self, t: &Translator) -> &'static str {
        let name = self.localized_name(t);
        name.strip_prefix('/').unwrap_or(name)
    }
}

/// A prompt shaped like `/<word><whitespace><args>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInvocation<'a> {
    /// The command word as typed, without the slash.
    pub word: &'a str,
    /// Everything after the word, trimmed.
    pub args: &'a str,
}

/// Splits a prompt into command word and arguments. Returns `None` for
/// prompts that do not start with a slash followed by at least one
/// non-whitespace character.
pub fn parse_invocation(prompt: &str) -> Option<CommandInvocation<'_>> {
    let captures = INVOCATION_RE.captures(prompt)?;
    let word = captures.get(1)?.as_str();
    let args = captures.get(2).map(|m| m.as_str().trim()).unwrap_or("");
    Some(CommandInvocation { word, args })
}

#[cfg(test)]
mod tests;
