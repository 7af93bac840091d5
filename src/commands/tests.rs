use super::*;
use crate::i18n::Language;

#[test]
fn parse_invocation_splits_word_and_args() {
    let invocation = parse_invocation("/image a cat   --ar 16:9  ").unwrap();
    assert_eq!(invocation.word, "image");
    assert_eq!(invocation.args, "a cat   --ar 16:9");

    let bare = parse_invocation("/joke").unwrap();
    assert_eq!(bare.word, "joke");
    assert_eq!(bare.args, "");
}

#[test]
fn parse_invocation_keeps_multiline_arguments() {
    let invocation = parse_invocation("/article\nrust ownership\nand borrowing").unwrap();
    assert_eq!(invocation.word, "article");
    assert_eq!(invocation.args, "rust ownership\nand borrowing");
}

#[test]
fn parse_invocation_rejects_non_commands() {
    assert!(parse_invocation("hello /image").is_none());
    assert!(parse_invocation("/").is_none());
    assert!(parse_invocation("/ image").is_none());
    assert!(parse_invocation("").is_none());
}

#[test]
fn every_dispatched_command_resolves_in_both_spellings_for_every_locale() {
    for language in Language::ALL {
        let t = Translator::new(language);
        let map = CommandMap::new(&t);
        for id in CommandId::DISPATCHED {
            assert_eq!(
                map.resolve(id.localized_word(&t)),
                Some(id),
                "{language}: localized word for {id:?}"
            );
            assert_eq!(
                map.resolve(id.canonical()),
                Some(id),
                "{language}: canonical word for {id:?}"
            );
        }
    }
}

#[test]
fn command_map_is_case_insensitive_and_excludes_session_commands() {
    let t = Translator::new(Language::En);
    let map = CommandMap::new(&t);
    assert_eq!(map.resolve("IMAGE"), Some(CommandId::Image));
    assert_eq!(map.resolve("DeepResearch"), Some(CommandId::DeepResearch));
    assert_eq!(map.resolve("role"), None);
    assert_eq!(map.resolve("clear"), None);
    assert_eq!(map.resolve("foo"), None);
    assert_eq!(map.len(), CommandId::DISPATCHED.len());
}

#[test]
fn arabic_map_contains_both_spellings() {
    let t = Translator::new(Language::Ar);
    let map = CommandMap::new(&t);
    assert_eq!(map.resolve("صورة"), Some(CommandId::Image));
    assert_eq!(map.resolve("بحث_عميق"), Some(CommandId::DeepResearch));
    assert_eq!(map.resolve("search"), Some(CommandId::Search));
    assert_eq!(map.len(), CommandId::DISPATCHED.len() * 2);
}

#[test]
fn command_table_follows_locale_and_order() {
    let en = all_commands(&Translator::new(Language::En));
    let names: Vec<&str> = en.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "/help",
            "/image",
            "/voice",
            "/joke",
            "/story",
            "/search",
            "/deepresearch",
            "/article",
            "/role",
            "/clear"
        ]
    );
    assert_eq!(en[1].description, "Generates an image from a prompt.");

    let ar = all_commands(&Translator::new(Language::Ar));
    assert_eq!(ar[1].name, "/صورة");
    assert_eq!(ar.len(), CommandId::ALL.len());
}

#[test]
fn matching_commands_filters_by_prefix() {
    let t = Translator::new(Language::En);
    let ids: Vec<CommandId> = matching_commands(&t, "/s").iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![CommandId::Story, CommandId::Search]);

    assert_eq!(matching_commands(&t, "/").len(), CommandId::ALL.len());
    assert!(matching_commands(&t, "/image cat").is_empty());
    assert!(matching_commands(&t, "image").is_empty());
    assert_eq!(matching_commands(&t, "/DEEP")[0].id, CommandId::DeepResearch);
}
