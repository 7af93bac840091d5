use super::*;
use tempfile::TempDir;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_defaults_to_chat() {
    let args = parse_args(&["nixchat"]);
    assert!(args.command.is_none());
    assert!(args.lang.is_none());
    assert!(args.image_dir.is_none());
}

#[test]
fn say_collects_prompt_words_including_flags_like_text() {
    let args = parse_args(&["nixchat", "say", "/image", "a", "cat", "--ar", "16:9"]);
    match args.command {
        Some(Commands::Say { prompt }) => {
            assert_eq!(prompt.join(" "), "/image a cat --ar 16:9");
        }
        _ => panic!("expected say"),
    }
}

#[test]
fn global_flags_work_after_subcommand() {
    let args = parse_args(&["nixchat", "commands", "--lang", "AR", "--image-dir", "/tmp/img"]);
    assert!(matches!(args.command, Some(Commands::Commands)));
    assert_eq!(args.lang, Some(Language::Ar));
    assert_eq!(args.image_dir, Some(PathBuf::from("/tmp/img")));
}

#[test]
fn unsupported_language_is_rejected() {
    assert!(Args::try_parse_from(["nixchat", "--lang", "fr"]).is_err());
}

#[test]
fn set_joins_multi_word_values() {
    let args = parse_args(&["nixchat", "set", "key-dir", "/srv/my", "keys"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, "key-dir");
            assert_eq!(value, vec!["/srv/my", "keys"]);
        }
        _ => panic!("expected set"),
    }
}

#[test]
fn clear_history_uses_kebab_case() {
    let args = parse_args(&["nixchat", "clear-history"]);
    assert!(matches!(args.command, Some(Commands::ClearHistory)));
}

#[test]
fn open_store_prefers_configured_data_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        data_dir: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };
    let store = open_store(&config).expect("store should open");
    assert_eq!(store.dir(), temp_dir.path());
}

#[test]
fn persist_setting_writes_app_scope_to_store() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = Store::new(temp_dir.path());
    let settings = Settings {
        language: Language::Ar,
        ..Settings::default()
    };
    persist_setting(SettingScope::App, &store, &settings, &Config::default())
        .expect("persist should succeed");
    assert_eq!(store.load_settings().unwrap().language, Language::Ar);
}
