mod cli;
mod config;
mod repl;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use spellwright_core::{Checker, CheckerConfig};

use cli::Cli;

/// Loaded if present in the working directory; there's no CLI flag for this
/// path, since the flag table this binary implements doesn't define one.
const DEFAULT_CONFIG_PATH: &str = "spellwright.ini";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut checker_config = CheckerConfig::default();

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        config::apply_ini_file(&mut checker_config, DEFAULT_CONFIG_PATH)?;
    }
    if cli.case_sensitive {
        checker_config.tokenizer.set_case_sensitive(true);
    }
    if cli.ignore_numbers {
        checker_config.tokenizer.set_ignore_numbers(true);
    }
    if cli.ignore_urls {
        checker_config.tokenizer.set_ignore_urls(true);
    }
    if let Some(max) = cli.suggestions {
        checker_config.suggester.set_max_suggestions(max);
    }

    let mut checker = Checker::new(checker_config);
    if !checker.load_dictionary(&cli.dictionary) {
        tracing::warn!(
            dictionary = %cli.dictionary.display(),
            "failed to load dictionary, starting empty"
        );
    }

    let mut dictionary_dirty = false;
    if let Some(word) = &cli.add {
        checker.add_word(word);
        dictionary_dirty = true;
        println!("added \"{word}\"");
    }
    if let Some(word) = &cli.remove {
        if checker.remove_word(word) {
            dictionary_dirty = true;
            println!("removed \"{word}\"");
        } else {
            println!("\"{word}\" was not in the dictionary");
        }
    }
    if dictionary_dirty {
        checker.save_dictionary(&cli.dictionary)?;
    }

    if cli.stats {
        let (word_count, approx_memory_bytes) = checker.stats();
        println!("({word_count}, {}) KB", approx_memory_bytes / 1024);
    }

    if let Some(word) = &cli.word {
        print_word(&checker, word);
    }

    if let Some(file) = &cli.file {
        check_file(&checker, file)?;
    }

    if cli.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::run(&mut checker, stdin.lock(), stdout.lock())?;
    }

    Ok(())
}

fn print_word(checker: &Checker, word: &str) {
    if checker.is_correct(word) {
        println!("\"{word}\" is spelled correctly.");
    } else {
        let suggestions: Vec<String> = checker.suggest(word).into_iter().map(|s| s.word).collect();
        println!("Word: \"{word}\" - Suggestions: {}", suggestions.join(", "));
    }
}

fn check_file(checker: &Checker, path: &Path) -> anyhow::Result<()> {
    let misspellings = checker.check_file(path)?;
    if misspellings.is_empty() {
        println!("No spelling errors found!");
        return Ok(());
    }
    for (word, line, column) in misspellings {
        let suggestions: Vec<String> =
            checker.suggest(&word).into_iter().map(|s| s.word).collect();
        println!(
            "Line {line}, Column {column}: \"{word}\" -> {}",
            suggestions.join(", ")
        );
    }
    Ok(())
}
