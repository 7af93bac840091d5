//! Line-oriented interactive chat.

use std::error::Error;
use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::cli::settings::{SetContext, SettingError, SettingRegistry, SettingScope};
use crate::commands::matching_commands;
use crate::core::chat::{ChatController, SubmitOutcome};
use crate::core::config::Config;
use crate::i18n::LocaleKey;
use crate::ui::TerminalRenderer;

/// Local inputs handled by the REPL itself, never sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    New,
    History,
    /// 1-based index into the history list; `None` when the index is missing
    /// or not a number.
    Open(Option<usize>),
    Commands(Option<String>),
    /// Change an app setting; `key` is `None` when missing.
    Set {
        key: Option<String>,
        value: Vec<String>,
    },
    ClearHistory,
    Quit,
}

/// Parses a line naming a known `:` command. Every other line, including
/// ones like `:) thanks`, returns `None` and goes to the model.
pub fn parse_meta(line: &str) -> Option<MetaCommand> {
    let rest = line.trim().strip_prefix(':')?;
    let mut words = rest.split_whitespace();
    let name = words.next()?;
    let arg = words.next();

    let command = match name {
        "new" => MetaCommand::New,
        "history" => MetaCommand::History,
        "open" => MetaCommand::Open(
            arg.and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n > 0),
        ),
        "commands" => MetaCommand::Commands(arg.map(str::to_string)),
        "set" => MetaCommand::Set {
            key: arg.map(str::to_string),
            value: words.map(str::to_string).collect(),
        },
        "clear-history" => MetaCommand::ClearHistory,
        "quit" | "q" | "exit" => MetaCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Applies an app setting (`theme`, `language`, `save-history`) to the
/// running chat and stores it. Connection settings are read at startup and
/// are refused here.
pub fn apply_live_setting(
    controller: &mut ChatController,
    key: &str,
    value: &[String],
) -> Result<String, SettingError> {
    let registry = SettingRegistry::new();
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    if handler.scope() != SettingScope::App {
        return Err(SettingError::NotLive(key.to_string()));
    }

    let mut settings = *controller.settings();
    let mut config = Config::default();
    let message = handler.set(
        value,
        &mut SetContext {
            settings: &mut settings,
            config: &mut config,
        },
    )?;
    controller
        .update_settings(settings)
        .map_err(|err| SettingError::Persist(err.to_string()))?;
    Ok(message)
}

pub async fn run_chat(
    mut controller: ChatController,
    renderer: TerminalRenderer,
) -> Result<(), Box<dyn Error>> {
    let t = controller.translator();
    println!("{}", t.t(LocaleKey::AppTitle));
    println!("{}", t.t(LocaleKey::WelcomeMessage));
    println!("{}", t.t(LocaleKey::ChatPlaceholder));
    if let Some(session) = controller.current_session() {
        println!("({})", session.title);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if let Some(meta) = parse_meta(&line) {
            if !handle_meta(meta, &mut controller, &renderer, &mut lines).await? {
                break;
            }
            continue;
        }

        match controller.submit(&line).await {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::NewSession => {
                println!("{}", controller.translator().t(LocaleKey::NewChat));
            }
            SubmitOutcome::Reply(message) => {
                println!("{}\n", renderer.render_with_label(&message));
            }
        }
    }

    Ok(())
}

/// Returns `false` when the loop should stop.
async fn handle_meta(
    meta: MetaCommand,
    controller: &mut ChatController,
    renderer: &TerminalRenderer,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<bool, Box<dyn Error>> {
    let t = controller.translator();
    match meta {
        MetaCommand::New => {
            controller.new_chat();
            println!("{}", t.t(LocaleKey::NewChat));
        }
        MetaCommand::History => {
            let current = controller.current_session().map(|s| s.id.clone());
            println!("{}", t.t(LocaleKey::ChatHistory));
            if controller.sessions().is_empty() {
                println!("(empty)");
            }
            for (i, session) in controller.sessions().iter().enumerate() {
                let marker = if Some(&session.id) == current.as_ref() {
                    "*"
                } else {
                    " "
                };
                println!("{marker}{:>3}. {}", i + 1, session.title);
            }
        }
        MetaCommand::Open(Some(n)) => {
            let id = controller.sessions().get(n - 1).map(|s| s.id.clone());
            match id {
                Some(id) => {
                    controller.select_chat(&id);
                    if let Some(session) = controller.current_session() {
                        for message in &session.messages {
                            println!("{}\n", renderer.render_with_label(message));
                        }
                    }
                }
                None => eprintln!("⚠️  No chat #{n}. Use :history to list chats."),
            }
        }
        MetaCommand::Open(None) => eprintln!("Usage: :open <n>"),
        MetaCommand::Commands(prefix) => {
            let input = format!("/{}", prefix.unwrap_or_default().trim_start_matches('/'));
            for command in matching_commands(&t, &input) {
                println!("  {:<16} {}", command.name, command.description);
            }
        }
        MetaCommand::Set {
            key: Some(key),
            value,
        } => match apply_live_setting(controller, &key, &value) {
            Ok(message) => println!("{message}"),
            Err(err) => err.print(),
        },
        MetaCommand::Set { key: None, .. } => {
            eprintln!("Usage: :set <theme|language|save-history> <value>")
        }
        MetaCommand::ClearHistory => {
            print!("{} [y/N] ", t.t(LocaleKey::ConfirmClearHistory));
            io::stdout().flush()?;
            let answer = lines.next_line().await?.unwrap_or_default();
            if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                controller.clear_history()?;
                println!("✅ {}", t.t(LocaleKey::ClearHistory));
            }
        }
        MetaCommand::Quit => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch::Dispatcher;
    use crate::core::store::Store;
    use crate::i18n::Language;
    use crate::utils::test_utils::ScriptedGateway;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn parses_meta_commands() {
        assert_eq!(parse_meta(":new"), Some(MetaCommand::New));
        assert_eq!(parse_meta("  :history "), Some(MetaCommand::History));
        assert_eq!(parse_meta(":open 2"), Some(MetaCommand::Open(Some(2))));
        assert_eq!(parse_meta(":open 0"), Some(MetaCommand::Open(None)));
        assert_eq!(parse_meta(":open two"), Some(MetaCommand::Open(None)));
        assert_eq!(parse_meta(":commands im"), Some(MetaCommand::Commands(Some("im".into()))));
        assert_eq!(parse_meta(":commands"), Some(MetaCommand::Commands(None)));
        assert_eq!(parse_meta(":clear-history"), Some(MetaCommand::ClearHistory));
        assert_eq!(parse_meta(":q"), Some(MetaCommand::Quit));
        assert_eq!(
            parse_meta(":set save-history off"),
            Some(MetaCommand::Set {
                key: Some("save-history".into()),
                value: vec!["off".into()],
            })
        );
        assert_eq!(
            parse_meta(":set"),
            Some(MetaCommand::Set {
                key: None,
                value: Vec::new(),
            })
        );
    }

    #[test]
    fn ordinary_lines_are_not_meta() {
        assert_eq!(parse_meta("hello"), None);
        assert_eq!(parse_meta("/image cat"), None);
        assert_eq!(parse_meta("what about :new"), None);
        assert_eq!(parse_meta(":) thanks"), None);
        assert_eq!(parse_meta(":nope"), None);
        assert_eq!(parse_meta(":"), None);
    }

    fn chat(dir: &TempDir) -> ChatController {
        let dispatcher = Dispatcher::new(Arc::new(ScriptedGateway::new()));
        ChatController::load(Store::new(dir.path()), dispatcher).unwrap()
    }

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn set_save_history_off_applies_to_the_running_chat() {
        let dir = TempDir::new().unwrap();
        let mut controller = chat(&dir);
        controller.submit("keep this").await;

        let message = apply_live_setting(&mut controller, "save-history", &words(&["off"])).unwrap();
        assert_eq!(message, "✅ Set save-history to: off");
        assert!(!controller.settings().save_history);
        assert!(controller.sessions().is_empty());
        assert!(!Store::new(dir.path()).load_settings().unwrap().save_history);

        controller.submit("not saved").await;
        let stored = Store::new(dir.path()).load_history().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "keep this");

        apply_live_setting(&mut controller, "save-history", &words(&["on"])).unwrap();
        assert_eq!(controller.sessions().len(), 1);
    }

    #[test]
    fn set_language_switches_the_translator() {
        let dir = TempDir::new().unwrap();
        let mut controller = chat(&dir);
        apply_live_setting(&mut controller, "language", &words(&["ar"])).unwrap();
        assert_eq!(controller.translator().language(), Language::Ar);
        assert_eq!(
            Store::new(dir.path()).load_settings().unwrap().language,
            Language::Ar
        );
    }

    #[test]
    fn set_rejects_unknown_invalid_and_connection_keys() {
        let dir = TempDir::new().unwrap();
        let mut controller = chat(&dir);
        let before = *controller.settings();

        let err = apply_live_setting(&mut controller, "colour", &words(&["red"])).unwrap_err();
        assert!(matches!(err, SettingError::UnknownKey(_)));
        let err = apply_live_setting(&mut controller, "theme", &words(&["neon"])).unwrap_err();
        assert!(matches!(err, SettingError::InvalidChoice { .. }));
        let err =
            apply_live_setting(&mut controller, "text-model", &words(&["gemini-2.5-pro"]))
                .unwrap_err();
        assert!(matches!(err, SettingError::NotLive(_)));

        assert_eq!(*controller.settings(), before);
    }
}
