//! Splits model output into text and fenced-code parts.

use crate::core::message::MessagePart;
use regex::Regex;
use std::sync::LazyLock;

/// Language tag used when a fence does not name one.
pub const PLAIN_LANGUAGE: &str = "text";

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_]+)?\n(.*?)```").expect("fence pattern is valid")
});

/// Splits `raw` into ordered text and code parts.
///
/// Text between fences is trimmed and dropped when empty; fenced bodies are
/// trimmed and tagged with the fence language or [`PLAIN_LANGUAGE`]. The
/// result is never empty: input without any non-empty segment yields one text
/// part holding the trimmed input, which may itself be empty.
pub fn split_response(raw: &str) -> Vec<MessagePart> {
    let mut parts = Vec::new();
    let mut last_index = 0;

    for captures in FENCE_RE.captures_iter(raw) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        push_text(&mut parts, &raw[last_index..whole.start()]);

        let language = captures
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or(PLAIN_LANGUAGE);
        let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");
        parts.push(MessagePart::code(body.trim(), language));

        last_index = whole.end();
    }

    push_text(&mut parts, &raw[last_index..]);

    if parts.is_empty() {
        parts.push(MessagePart::text(raw.trim()));
    }
    parts
}

fn push_text(parts: &mut Vec<MessagePart>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        parts.push(MessagePart::text(trimmed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_single_text_part() {
        assert_eq!(
            split_response("plain text"),
            vec![MessagePart::text("plain text")]
        );
    }

    #[test]
    fn fenced_block_between_text_yields_three_parts() {
        assert_eq!(
            split_response("pre ```js\ncode()\n``` post"),
            vec![
                MessagePart::text("pre"),
                MessagePart::code("code()", "js"),
                MessagePart::text("post"),
            ]
        );
    }

    #[test]
    fn fence_without_language_is_tagged_text() {
        assert_eq!(
            split_response("```\nno lang\n```"),
            vec![MessagePart::code("no lang", "text")]
        );
    }

    #[test]
    fn multiple_fences_preserve_order() {
        let raw = "Intro\n```rust\nfn main() {}\n```\nMiddle\n```\nraw\n```";
        assert_eq!(
            split_response(raw),
            vec![
                MessagePart::text("Intro"),
                MessagePart::code("fn main() {}", "rust"),
                MessagePart::text("Middle"),
                MessagePart::code("raw", "text"),
            ]
        );
    }

    #[test]
    fn unterminated_fence_stays_text() {
        let raw = "look:\n```python\nprint(1)\n";
        assert_eq!(split_response(raw), vec![MessagePart::text(raw.trim())]);
    }

    #[test]
    fn fence_with_unsupported_tag_characters_is_not_code() {
        // `c++` is not a word tag, so the opening line is not a fence.
        let raw = "```c++\nint x;\n```";
        assert_eq!(split_response(raw), vec![MessagePart::text(raw)]);
    }

    #[test]
    fn empty_fence_body_produces_empty_code_part() {
        assert_eq!(
            split_response("```sh\n```"),
            vec![MessagePart::code("", "sh")]
        );
    }

    #[test]
    fn empty_or_blank_input_yields_one_empty_text_part() {
        assert_eq!(split_response(""), vec![MessagePart::text("")]);
        assert_eq!(split_response("  \n\t "), vec![MessagePart::text("")]);
    }
}
