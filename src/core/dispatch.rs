//! Routes a prompt to a canned reply or a remote generation call and turns
//! the result into message parts.
//!
//! Routing is split in two: [`plan`] decides what to do without any I/O, and
//! [`Dispatcher::dispatch`] carries the plan out against a [`Gateway`]. The
//! dispatcher never touches sessions; the chat controller owns those.

use crate::commands::{parse_invocation, CommandId, CommandMap};
use crate::core::gateway::{AspectRatio, Gateway, GatewayError, ImageRequest, TextRequest};
use crate::core::markdown::split_response;
use crate::core::message::MessagePart;
use crate::i18n::{Language, LocaleKey, Translator};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, error};

static ASPECT_RATIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--ar\s+(1:1|16:9|9:16|4:3|3:4)").expect("aspect ratio pattern is valid")
});

const VOICE_SEPARATOR: &str = "\n\n";

/// What a prompt resolves to before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Answer locally with these parts.
    Reply(Vec<MessagePart>),
    /// Text generation; the output is split into text and code parts.
    Text(TextRequest),
    /// Text generation whose output is spoken.
    Voice(TextRequest),
    Image(ImageRequest),
    /// Web-grounded generation.
    Grounded(TextRequest),
}

/// Appends the "respond in <language>" directive to a system instruction.
pub fn with_language_directive(system_instruction: &str, language: Language) -> String {
    format!(
        "{system_instruction}\n\n- IMPORTANT: You must respond in {}.",
        language.english_name()
    )
}

/// Splits `--ar <ratio>` out of an image prompt. Only the first occurrence
/// is removed.
pub fn extract_aspect_ratio(args: &str) -> (String, AspectRatio) {
    match ASPECT_RATIO_RE.captures(args) {
        Some(captures) => {
            let ratio = captures
                .get(1)
                .and_then(|m| AspectRatio::parse(m.as_str()))
                .unwrap_or_default();
            let prompt = ASPECT_RATIO_RE.replacen(args, 1, "").trim().to_string();
            (prompt, ratio)
        }
        None => (args.trim().to_string(), AspectRatio::default()),
    }
}

/// Decides how to answer `prompt`.
pub fn plan(prompt: &str, system_instruction: &str, t: &Translator) -> Plan {
    let prompt = prompt.trim();
    let instruction = with_language_directive(system_instruction, t.language());
    let free_text = |instruction: String| {
        Plan::Text(TextRequest {
            prompt: prompt.to_string(),
            system_instruction: instruction,
        })
    };

    let Some(invocation) = parse_invocation(prompt) else {
        return free_text(instruction);
    };
    let Some(command) = CommandMap::new(t).resolve(invocation.word) else {
        debug!(word = invocation.word, "unknown command, sending as text");
        return free_text(instruction);
    };

    let args = invocation.args;
    let missing = |key: LocaleKey| Plan::Reply(vec![MessagePart::text(t.t(key))]);
    let text = |prompt: String, instruction: String| TextRequest {
        prompt,
        system_instruction: instruction,
    };

    match command {
        CommandId::Image => {
            if args.is_empty() {
                return missing(LocaleKey::ImagePromptMissing);
            }
            let (image_prompt, aspect_ratio) = extract_aspect_ratio(args);
            if image_prompt.is_empty() {
                return missing(LocaleKey::ImagePromptMissing);
            }
            Plan::Image(ImageRequest {
                prompt: image_prompt,
                aspect_ratio,
            })
        }
        CommandId::Voice => {
            if args.is_empty() {
                return missing(LocaleKey::VoicePromptMissing);
            }
            Plan::Voice(text(args.to_string(), instruction))
        }
        CommandId::Help => Plan::Reply(vec![MessagePart::text(t.t(LocaleKey::HelpMessage))]),
        CommandId::Joke => Plan::Text(text(t.t(LocaleKey::JokePrompt).to_string(), instruction)),
        CommandId::Story => {
            let story_prompt = if args.is_empty() {
                t.t(LocaleKey::StoryPrompt).to_string()
            } else {
                t.format(LocaleKey::StoryTopicPrompt, &[args])
            };
            Plan::Text(text(story_prompt, instruction))
        }
        CommandId::Search => {
            if args.is_empty() {
                return missing(LocaleKey::SearchQueryMissing);
            }
            Plan::Grounded(text(args.to_string(), instruction))
        }
        CommandId::DeepResearch => {
            if args.is_empty() {
                return missing(LocaleKey::ResearchTopicMissing);
            }
            Plan::Grounded(text(
                t.format(LocaleKey::DeepResearchPrompt, &[args]),
                instruction,
            ))
        }
        CommandId::Article => {
            if args.is_empty() {
                return missing(LocaleKey::ArticleTopicMissing);
            }
            Plan::Text(text(
                format!("Write an article about: {args}"),
                t.format(LocaleKey::ArticleSystemInstruction, &[instruction.as_str()]),
            ))
        }
        // Session commands never reach the map; treat them as text if they do.
        CommandId::Role | CommandId::Clear => free_text(instruction),
    }
}

/// Executes plans against a [`Gateway`], converting failures into a
/// localized text part.
#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn Gateway>,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn dispatch(
        &self,
        prompt: &str,
        system_instruction: &str,
        t: &Translator,
    ) -> Vec<MessagePart> {
        match self.execute(plan(prompt, system_instruction, t)).await {
            Ok(parts) => parts,
            Err(err) => {
                error!(error = %err, "dispatch failed");
                vec![error_part(&err, t)]
            }
        }
    }

    pub async fn execute(&self, plan: Plan) -> Result<Vec<MessagePart>, GatewayError> {
        match plan {
            Plan::Reply(parts) => Ok(parts),
            Plan::Text(request) => {
                let raw = self.gateway.generate_text(request).await?;
                Ok(split_response(&raw))
            }
            Plan::Voice(request) => {
                let raw = self.gateway.generate_text(request).await?;
                Ok(vec![MessagePart::Audio {
                    content: speakable_text(&split_response(&raw)),
                }])
            }
            Plan::Image(request) => {
                let bytes = self.gateway.generate_image(request).await?;
                Ok(vec![MessagePart::png_image(&bytes)])
            }
            Plan::Grounded(request) => {
                let answer = self.gateway.generate_grounded(request).await?;
                let sources = answer
                    .sources
                    .into_iter()
                    .filter(|source| !source.uri.trim().is_empty())
                    .collect();
                Ok(vec![MessagePart::SearchResult {
                    content: answer.text.trim().to_string(),
                    sources,
                }])
            }
        }
    }
}

/// Text and code contents joined by a blank line.
fn speakable_text(parts: &[MessagePart]) -> String {
    parts
        .iter()
        .filter_map(|part| match part {
            MessagePart::Text { content } | MessagePart::Code { content, .. } => {
                Some(content.as_str())
            }
            MessagePart::Image { .. }
            | MessagePart::Audio { .. }
            | MessagePart::SearchResult { .. } => None,
        })
        .collect::<Vec<_>>()
        .join(VOICE_SEPARATOR)
}

fn error_part(err: &GatewayError, t: &Translator) -> MessagePart {
    let message = err.to_string();
    if message.trim().is_empty() {
        MessagePart::text(t.t(LocaleKey::UnexpectedError))
    } else {
        MessagePart::text(format!("{} {message}", t.t(LocaleKey::ErrorPrefix)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keyfile::KeyError;
    use crate::utils::test_utils::{GatewayCall, ScriptedGateway, DEFAULT_TEXT_REPLY};

    const SYSTEM: &str = "You are helpful.";

    fn en() -> Translator {
        Translator::new(Language::En)
    }

    fn ar() -> Translator {
        Translator::new(Language::Ar)
    }

    async fn run(
        gateway: ScriptedGateway,
        prompt: &str,
        t: &Translator,
    ) -> (Vec<MessagePart>, Vec<GatewayCall>) {
        let gateway = Arc::new(gateway);
        let dispatcher = Dispatcher::new(gateway.clone());
        let parts = dispatcher.dispatch(prompt, SYSTEM, t).await;
        (parts, gateway.calls())
    }

    #[test]
    fn language_directive_names_the_language() {
        assert_eq!(
            with_language_directive("Base", Language::Ar),
            "Base\n\n- IMPORTANT: You must respond in Arabic."
        );
    }

    #[test]
    fn aspect_ratio_is_extracted_once() {
        assert_eq!(
            extract_aspect_ratio("cat --ar 16:9"),
            ("cat".to_string(), AspectRatio::Widescreen)
        );
        assert_eq!(
            extract_aspect_ratio("--ar 3:4 a --ar 1:1 b"),
            ("a --ar 1:1 b".to_string(), AspectRatio::Portrait)
        );
        assert_eq!(
            extract_aspect_ratio("dog --ar 2:1"),
            ("dog --ar 2:1".to_string(), AspectRatio::Square)
        );
    }

    #[test]
    fn free_text_is_forwarded_verbatim() {
        let planned = plan("  hello world \n", SYSTEM, &en());
        assert_eq!(
            planned,
            Plan::Text(TextRequest {
                prompt: "hello world".into(),
                system_instruction: with_language_directive(SYSTEM, Language::En),
            })
        );
    }

    #[test]
    fn unknown_command_keeps_its_slash() {
        match plan("/foo bar", SYSTEM, &en()) {
            Plan::Text(request) => assert_eq!(request.prompt, "/foo bar"),
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn session_commands_are_not_dispatched() {
        match plan("/role pirate", SYSTEM, &en()) {
            Plan::Text(request) => assert_eq!(request.prompt, "/role pirate"),
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn story_uses_topic_template_when_given() {
        match plan("/story dragons", SYSTEM, &en()) {
            Plan::Text(request) => assert_eq!(request.prompt, "Tell me a short story about dragons."),
            other => panic!("unexpected plan: {other:?}"),
        }
        match plan("/STORY", SYSTEM, &en()) {
            Plan::Text(request) => assert_eq!(request.prompt, "Tell me a short story."),
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn article_replaces_system_instruction_with_template() {
        match plan("/article tide pools", SYSTEM, &en()) {
            Plan::Text(request) => {
                assert_eq!(request.prompt, "Write an article about: tide pools");
                let directive = with_language_directive(SYSTEM, Language::En);
                assert!(request.system_instruction.starts_with(&directive));
                assert!(request.system_instruction.contains("well-structured"));
            }
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn deep_research_wraps_topic() {
        match plan("/deepresearch fusion power", SYSTEM, &en()) {
            Plan::Grounded(request) => {
                assert!(request.prompt.contains("\"fusion power\""));
            }
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn missing_arguments_reply_locally() {
        let t = en();
        for (prompt, key) in [
            ("/image", LocaleKey::ImagePromptMissing),
            ("/image   --ar 16:9 ", LocaleKey::ImagePromptMissing),
            ("/voice", LocaleKey::VoicePromptMissing),
            ("/search  ", LocaleKey::SearchQueryMissing),
            ("/deepresearch", LocaleKey::ResearchTopicMissing),
            ("/article", LocaleKey::ArticleTopicMissing),
        ] {
            assert_eq!(
                plan(prompt, SYSTEM, &t),
                Plan::Reply(vec![MessagePart::text(t.t(key))]),
                "{prompt}"
            );
        }
    }

    #[tokio::test]
    async fn image_without_prompt_makes_no_call() {
        let (parts, calls) = run(ScriptedGateway::new(), "/image", &en()).await;
        assert_eq!(parts, vec![MessagePart::text(en().t(LocaleKey::ImagePromptMissing))]);
        assert!(calls.is_empty());
    }

    #[tokio::test]
    async fn image_with_ratio_produces_data_uri() {
        let gateway = ScriptedGateway::new().with_image(vec![1, 2, 3]);
        let (parts, calls) = run(gateway, "/image cat --ar 16:9", &en()).await;
        assert_eq!(
            calls,
            vec![GatewayCall::Image(ImageRequest {
                prompt: "cat".into(),
                aspect_ratio: AspectRatio::Widescreen,
            })]
        );
        assert_eq!(parts, vec![MessagePart::png_image(&[1, 2, 3])]);
        assert!(parts[0].content().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn arabic_command_words_resolve() {
        let t = ar();
        let image = format!("/{} قطة", CommandId::Image.localized_word(&t));
        let (parts, calls) = run(ScriptedGateway::new(), &image, &t).await;
        assert!(matches!(calls.as_slice(), [GatewayCall::Image(request)] if request.prompt == "قطة"));
        assert_eq!(parts[0].kind(), "image");

        let help = format!("/{}", CommandId::Help.localized_word(&t));
        let (parts, calls) = run(ScriptedGateway::new(), &help, &t).await;
        assert_eq!(parts, vec![MessagePart::text(t.t(LocaleKey::HelpMessage))]);
        assert!(calls.is_empty());

        // English spellings keep working under the Arabic locale.
        let (_, calls) = run(ScriptedGateway::new(), "/joke", &t).await;
        match calls.as_slice() {
            [GatewayCall::Text(request)] => {
                assert_eq!(request.prompt, t.t(LocaleKey::JokePrompt));
                assert!(request.system_instruction.ends_with("respond in Arabic."));
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[tokio::test]
    async fn text_reply_is_split_into_parts() {
        let gateway = ScriptedGateway::new().with_text("Here:\n```rust\nfn main() {}\n```");
        let (parts, _) = run(gateway, "show me rust", &en()).await;
        assert_eq!(
            parts,
            vec![MessagePart::text("Here:"), MessagePart::code("fn main() {}", "rust")]
        );
    }

    #[tokio::test]
    async fn voice_joins_text_and_code() {
        let gateway = ScriptedGateway::new().with_text("Hello\n```\nworld\n```\nbye");
        let (parts, calls) = run(gateway, "/voice greet me", &en()).await;
        assert_eq!(
            parts,
            vec![MessagePart::Audio {
                content: "Hello\n\nworld\n\nbye".into()
            }]
        );
        assert!(matches!(calls.as_slice(), [GatewayCall::Text(request)] if request.prompt == "greet me"));
    }

    #[tokio::test]
    async fn search_drops_sources_without_uri() {
        let gateway = ScriptedGateway::new().with_grounded(
            "  The answer. ",
            &[("Docs", "https://docs.example"), ("Broken", ""), ("", "https://bare.example")],
        );
        let (parts, calls) = run(gateway, "/search rust 2024 edition", &en()).await;
        assert!(matches!(calls.as_slice(), [GatewayCall::Grounded(request)] if request.prompt == "rust 2024 edition"));
        match parts.as_slice() {
            [MessagePart::SearchResult { content, sources }] => {
                assert_eq!(content, "The answer.");
                let uris: Vec<&str> = sources.iter().map(|s| s.uri.as_str()).collect();
                assert_eq!(uris, vec!["https://docs.example", "https://bare.example"]);
            }
            other => panic!("unexpected parts: {other:?}"),
        }
    }

    #[tokio::test]
    async fn gateway_errors_become_prefixed_text() {
        let gateway = ScriptedGateway::new().with_text_error(GatewayError::Http {
            status: 503,
            message: "overloaded".into(),
        });
        let (parts, _) = run(gateway, "hi", &en()).await;
        assert_eq!(parts, vec![MessagePart::text("Error: overloaded (HTTP 503)")]);

        let gateway = ScriptedGateway::new()
            .with_image_error(GatewayError::Config(KeyError::NotFound { searched: vec!["env.local".into()] }));
        let (parts, _) = run(gateway, "/image cat", &en()).await;
        assert!(parts[0].content().starts_with("Error: API Key not found."));
    }

    #[tokio::test]
    async fn empty_error_message_uses_unexpected_error() {
        let gateway = ScriptedGateway::new().with_text_error(GatewayError::Transport(String::new()));
        let (parts, _) = run(gateway, "/joke", &en()).await;
        assert_eq!(parts, vec![MessagePart::text(en().t(LocaleKey::UnexpectedError))]);
    }

    #[tokio::test]
    async fn joke_sends_localized_prompt() {
        let (parts, calls) = run(ScriptedGateway::new(), "/Joke", &en()).await;
        assert_eq!(parts, vec![MessagePart::text(DEFAULT_TEXT_REPLY)]);
        assert!(matches!(calls.as_slice(), [GatewayCall::Text(request)] if request.prompt == "Tell me a joke."));
    }
}
