use super::CommandId;
use crate::i18n::Translator;
use std::collections::HashMap;

/// One row of the command table, rendered in the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn all_commands(t: &Translator) -> Vec<Command> {
    CommandId::ALL
        .into_iter()
        .map(|id| Command {
            id,
            name: id.localized_name(t),
            description: t.t(id.description_key()),
        })
        .collect()
}

/// Commands whose localized name starts with the typed prefix.
///
/// Suggestions are only offered while the input is a bare `/word` with no
/// whitespace yet.
pub fn matching_commands(t: &Translator, input: &str) -> Vec<Command> {
    let Some(query) = input.strip_prefix('/') else {
        return Vec::new();
    };
    if query.contains(char::is_whitespace) {
        return Vec::new();
    }
    let query = query.to_lowercase();
    all_commands(t)
        .into_iter()
        .filter(|command| {
            command
                .name
                .strip_prefix('/')
                .unwrap_or(command.name)
                .to_lowercase()
                .starts_with(&query)
        })
        .collect()
}

/// Maps typed command words to canonical identifiers.
///
/// Holds the active locale's spellings plus the canonical English words, so
/// `/image` keeps working while the interface is in Arabic.
#[derive(Debug, Clone)]
pub struct CommandMap {
    words: HashMap<String, CommandId>,
}

impl CommandMap {
    pub fn new(t: &Translator) -> Self {
        let mut words = HashMap::new();
        for id in CommandId::DISPATCHED {
            words.insert(id.localized_word(t).to_lowercase(), id);
        }
        // English spellings win on collision.
        for id in CommandId::DISPATCHED {
            words.insert(id.canonical().to_string(), id);
        }
        Self { words }
    }

    /// Resolves a typed word (case-insensitive).
    pub fn resolve(&self, word: &str) -> Option<CommandId> {
        self.words.get(&word.to_lowercase()).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.words.len()
    }
}
