//! One-shot "say" command

use std::error::Error;

use chrono::Utc;

use crate::core::chat::PromptAction;
use crate::core::dispatch::Dispatcher;
use crate::core::message::{Message, Role};
use crate::core::session::timestamp_id;
use crate::i18n::{LocaleKey, Translator};
use crate::ui::TerminalRenderer;

/// Dispatches `prompt` with the default system instruction and prints the
/// reply. Nothing is written to history.
pub async fn run_say(
    prompt: &str,
    dispatcher: &Dispatcher,
    t: Translator,
    renderer: &TerminalRenderer,
) -> Result<(), Box<dyn Error>> {
    if prompt.trim().is_empty() {
        eprintln!("Usage: nixchat say <prompt>");
        std::process::exit(1);
    }

    match say(prompt, dispatcher, t).await {
        Some(reply) => println!("{}", renderer.render(&reply)),
        None => {
            eprintln!("❌ Session commands (/role, /clear) only work in 'nixchat chat'.");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Returns `None` for blank input and for session commands, which have no
/// session to act on here.
pub async fn say(prompt: &str, dispatcher: &Dispatcher, t: Translator) -> Option<Message> {
    match PromptAction::classify(prompt, &t) {
        PromptAction::Dispatch => {}
        PromptAction::Ignore | PromptAction::NewSession | PromptAction::SetRole(_) => {
            return None
        }
    }
    let parts = dispatcher
        .dispatch(prompt, t.t(LocaleKey::DefaultSystemInstruction), &t)
        .await;
    Some(Message::new(
        timestamp_id("model", Utc::now()),
        Role::Model,
        parts,
    ))
}
