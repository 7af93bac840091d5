use crate::core::message::{Message, MessagePart, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

pub const TITLE_MAX_CHARS: usize = 40;
const TITLE_ELLIPSIS: &str = "...";

/// A conversation thread with its own history and system instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    /// Unix milliseconds.
    pub created_at: i64,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub system_instruction: String,
}

impl ChatSession {
    /// Starts a session whose title is derived from the first prompt.
    pub fn start(
        first_prompt: &str,
        system_instruction: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: timestamp_id("session", now),
            title: session_title(first_prompt),
            created_at: now.timestamp_millis(),
            messages: Vec::new(),
            system_instruction: system_instruction.into(),
        }
    }

    pub fn push(&mut self, role: Role, parts: Vec<MessagePart>, now: DateTime<Utc>) -> &Message {
        let prefix = match role {
            Role::User => "user",
            Role::Model => "model",
        };
        let message = Message::new(self.unique_message_id(prefix, now), role, parts);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    fn unique_message_id(&self, prefix: &str, now: DateTime<Utc>) -> String {
        let base = timestamp_id(prefix, now);
        if !self.messages.iter().any(|m| m.id == base) {
            return base;
        }
        let mut counter = 1;
        loop {
            let candidate = format!("{base}-{counter}");
            if !self.messages.iter().any(|m| m.id == candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// The first 40 characters of `prompt` followed by `...`, or the prompt
/// itself when it is short enough. Counts grapheme clusters so combining
/// marks stay attached to their base character.
pub fn session_title(prompt: &str) -> String {
    let mut graphemes = prompt.graphemes(true);
    let head: String = graphemes.by_ref().take(TITLE_MAX_CHARS).collect();
    if graphemes.next().is_some() {
        format!("{head}{TITLE_ELLIPSIS}")
    } else {
        head
    }
}

pub fn timestamp_id(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}-{}", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn long_prompt_title_is_truncated_with_ellipsis() {
        let prompt = "abcdefghij".repeat(5);
        assert_eq!(prompt.chars().count(), 50);
        let title = session_title(&prompt);
        assert_eq!(title, format!("{}...", &prompt[..40]));
    }

    #[test]
    fn short_prompt_title_is_unchanged() {
        assert_eq!(session_title("0123456789"), "0123456789");
        let exactly_forty = "x".repeat(40);
        assert_eq!(session_title(&exactly_forty), exactly_forty);
    }

    #[test]
    fn title_keeps_combining_marks_together() {
        // Each "بَ" is a base letter plus a combining fatha.
        let prompt = "بَ".repeat(41);
        let title = session_title(&prompt);
        assert_eq!(title, format!("{}...", "بَ".repeat(40)));
    }

    #[test]
    fn start_derives_id_title_and_timestamp() {
        let session = ChatSession::start("hello there", "be nice", fixed_now());
        assert_eq!(session.id, "session-1700000000123");
        assert_eq!(session.title, "hello there");
        assert_eq!(session.created_at, 1_700_000_000_123);
        assert_eq!(session.system_instruction, "be nice");
        assert!(session.messages.is_empty());
    }

    #[test]
    fn push_assigns_distinct_ids_within_the_same_millisecond() {
        let mut session = ChatSession::start("hi", "", fixed_now());
        session.push(Role::User, vec![MessagePart::text("a")], fixed_now());
        session.push(Role::Model, vec![MessagePart::text("b")], fixed_now());
        session.push(Role::Model, vec![MessagePart::text("c")], fixed_now());

        let ids: Vec<&str> = session.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["user-1700000000123", "model-1700000000123", "model-1700000000123-1"]
        );
        assert_eq!(session.messages.last().unwrap().parts[0].content(), "c");
    }

    #[test]
    fn session_json_uses_camel_case_fields() {
        let session = ChatSession::start("hi", "sys", fixed_now());
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["createdAt"], 1_700_000_000_123_i64);
        assert_eq!(value["systemInstruction"], "sys");
    }
}
