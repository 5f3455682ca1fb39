use std::io::Write;

use clap::Parser;
use spellwright_core::{Checker, CheckerConfig};

#[path = "../src/cli.rs"]
mod cli;
#[path = "../src/config.rs"]
mod config;

#[test]
fn dictionary_flag_defaults_to_the_conventional_path() {
    let parsed = cli::Cli::parse_from(["spellwright", "-w", "hello"]);
    assert_eq!(parsed.dictionary.to_str().unwrap(), cli::DEFAULT_DICTIONARY);
    assert_eq!(parsed.word.as_deref(), Some("hello"));
}

#[test]
fn add_and_remove_flags_are_combinable_in_one_invocation() {
    let parsed = cli::Cli::parse_from(["spellwright", "-a", "gizmo", "-r", "widget"]);
    assert_eq!(parsed.add.as_deref(), Some("gizmo"));
    assert_eq!(parsed.remove.as_deref(), Some("widget"));
}

#[test]
fn ini_overrides_feed_into_a_working_checker() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[suggester]").unwrap();
    writeln!(file, "max_suggestions = 2").unwrap();
    file.flush().unwrap();

    let mut checker_config = CheckerConfig::default();
    config::apply_ini_file(&mut checker_config, file.path()).unwrap();

    let mut checker = Checker::new(checker_config);
    for word in ["cat", "car", "can", "cab", "cap"] {
        checker.add_word(word);
    }

    let suggestions = checker.suggest("cxt");
    assert!(suggestions.len() <= 2);
}

#[test]
fn dictionary_file_round_trips_through_a_checker() {
    let dir = tempfile::tempdir().unwrap();
    let dict_path = dir.path().join("dict.txt");

    let mut checker = Checker::new(CheckerConfig::default());
    checker.add_word("spellwright");
    checker.save_dictionary(&dict_path).unwrap();

    let mut reloaded = Checker::new(CheckerConfig::default());
    assert!(reloaded.load_dictionary(&dict_path));
    assert!(reloaded.is_correct("spellwright"));
}
