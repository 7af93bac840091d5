//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod repl;
pub mod say;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::api::gemini::GeminiClient;
use crate::cli::repl::run_chat;
use crate::cli::say::run_say;
use crate::cli::settings::{
    SetContext, SettingError, SettingHandler, SettingRegistry, SettingScope,
};
use crate::commands::all_commands;
use crate::core::chat::ChatController;
use crate::core::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::core::keyfile::{FileKeySource, KeyResolver};
use crate::core::settings::Settings;
use crate::core::store::Store;
use crate::i18n::{Language, LocaleKey, Translator};
use crate::ui::TerminalRenderer;

#[derive(Parser)]
#[command(name = "nixchat")]
#[command(version)]
#[command(about = "A terminal chat assistant backed by Gemini")]
#[command(
    long_about = "nixchat is a terminal chat assistant for Google's Gemini models. It keeps a \
history of chat sessions, understands slash commands for images, speech, web search and \
articles, and speaks English or Arabic.\n\n\
API key:\n\
  Put GEMINI_API_KEY=<your key> in env.local or env.txt in the current directory\n\
  (or the directory set with 'nixchat set key-dir <dir>').\n\n\
Chat commands:\n\
  /help             List the slash commands\n\
  /image <prompt>   Generate an image (--ar 1:1|16:9|9:16|4:3|3:4)\n\
  /search <query>   Answer with web sources\n\
  /role <persona>   Change how the assistant behaves in this chat\n\
  /clear            Start a new chat\n\n\
Chat controls:\n\
  :new :history :open <n> :commands [prefix] :set <key> <value> :clear-history :quit\n\n\
Set RUST_LOG=nixchat=debug to see request logs on stderr."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Interface and reply language for this run (en or ar)
    #[arg(long, global = true, value_name = "LANG", value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Directory where generated images are written
    #[arg(long, global = true, value_name = "DIR")]
    pub image_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive chat (default)
    Chat,
    /// Send one prompt and print the reply without touching history
    Say {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// List the slash commands in the active language
    Commands,
    /// Change a setting
    Set {
        /// Setting key, e.g. theme, language, save-history, text-model
        key: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Restore a setting to its default
    Unset {
        key: String,
    },
    /// Show current settings
    Settings,
    /// Delete all saved chat sessions
    ClearHistory,
}

fn parse_language(input: &str) -> Result<Language, String> {
    Language::from_code(input).ok_or_else(|| format!("unsupported language '{input}' (use en or ar)"))
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nixchat=warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();
    let config = Config::load()?;
    let store = open_store(&config)?;
    let image_dir = args.image_dir.clone().unwrap_or_else(|| PathBuf::from("."));

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let mut controller = ChatController::load(store, build_dispatcher(&config))?;
            if let Some(language) = args.lang {
                controller = controller.with_language(language);
            }
            run_chat(controller, TerminalRenderer::new(image_dir)).await
        }
        Commands::Say { prompt } => {
            let settings = store.load_settings()?;
            let language = args.lang.unwrap_or(settings.language);
            run_say(
                &prompt.join(" "),
                &build_dispatcher(&config),
                Translator::new(language),
                &TerminalRenderer::new(image_dir),
            )
            .await
        }
        Commands::Commands => {
            let language = match args.lang {
                Some(language) => language,
                None => store.load_settings()?.language,
            };
            for command in all_commands(&Translator::new(language)) {
                println!("  {:<16} {}", command.name, command.description);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            apply_setting(&store, config, &key, |handler, ctx| handler.set(&value, ctx))
        }
        Commands::Unset { key } => {
            apply_setting(&store, config, &key, |handler, ctx| Ok(handler.unset(ctx)))
        }
        Commands::Settings => {
            let settings = store.load_settings()?;
            let t = Translator::new(args.lang.unwrap_or(settings.language));
            let registry = SettingRegistry::new();
            println!("{}:", t.t(LocaleKey::Settings));
            for key in registry.keys_display_order() {
                if let Some(handler) = registry.get(key) {
                    println!("{}", handler.format(&settings, &config, &t));
                }
            }
            Ok(())
        }
        Commands::ClearHistory => {
            store.clear_history()?;
            println!("✅ Chat history cleared");
            Ok(())
        }
    }
}

fn open_store(config: &Config) -> Result<Store, Box<dyn Error>> {
    let dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => Store::default_dir()?,
    };
    Ok(Store::new(dir))
}

fn build_dispatcher(config: &Config) -> Dispatcher {
    let keys = KeyResolver::new(FileKeySource::new(config.key_dir()));
    let client = GeminiClient::new(keys)
        .with_base_url(config.base_url())
        .with_text_model(config.text_model())
        .with_image_model(config.image_model());
    Dispatcher::new(Arc::new(client))
}

fn apply_setting<F>(
    store: &Store,
    mut config: Config,
    key: &str,
    action: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&dyn SettingHandler, &mut SetContext<'_>) -> Result<String, SettingError>,
{
    let registry = SettingRegistry::new();
    let mut settings = store.load_settings()?;

    let result = match registry.get(key) {
        None => Err(SettingError::UnknownKey(key.to_string())),
        Some(handler) => {
            let mut ctx = SetContext {
                settings: &mut settings,
                config: &mut config,
            };
            action(handler, &mut ctx).and_then(|message| {
                persist_setting(handler.scope(), store, &settings, &config)?;
                Ok(message)
            })
        }
    };

    match result {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}

fn persist_setting(
    scope: SettingScope,
    store: &Store,
    settings: &Settings,
    config: &Config,
) -> Result<(), SettingError> {
    match scope {
        SettingScope::App => store
            .save_settings(settings)
            .map_err(|err| SettingError::Persist(err.to_string())),
        SettingScope::Config => {
            let path = Config::config_path().ok_or_else(|| {
                SettingError::Persist("could not determine a config directory".to_string())
            })?;
            config
                .save_to_path(&path)
                .map_err(|err| SettingError::Persist(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests;
