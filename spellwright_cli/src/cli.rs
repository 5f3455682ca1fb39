//! Command-line argument surface, built with `clap`'s derive API in the
//! same style the wider example pack uses for small spell/text tools.
//! The flag table is fixed by the external CLI contract this binary
//! implements; it is a flat set of flags rather than subcommands so that
//! `--add` and `--remove` can be combined with checking a word or file in
//! one invocation.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DICTIONARY: &str = "dictionaries/en_US.dict";

#[derive(Debug, Parser)]
#[command(name = "spellwright", version, about = "A spell-checking engine")]
pub struct Cli {
    /// Load the lexicon from PATH.
    #[arg(short = 'd', long, default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Check WORD and print its correctness or suggestions.
    #[arg(short = 'w', long)]
    pub word: Option<String>,

    /// Start an interactive REPL session.
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Disable case-folding: match words exactly as typed.
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Don't treat number-like tokens as always-correct.
    #[arg(long)]
    pub ignore_numbers: bool,

    /// Don't treat URL-like tokens as always-correct.
    #[arg(long)]
    pub ignore_urls: bool,

    /// Cap the number of suggestions printed per misspelling.
    #[arg(short = 's', long)]
    pub suggestions: Option<usize>,

    /// Add WORD to the lexicon (written back to --dictionary).
    #[arg(short = 'a', long)]
    pub add: Option<String>,

    /// Remove WORD from the lexicon (written back to --dictionary).
    #[arg(short = 'r', long)]
    pub remove: Option<String>,

    /// Print (word_count, memory_bytes/1024) KB.
    #[arg(long)]
    pub stats: bool,

    /// Check FILE, printing each miss as "Line L, Column C: ..." or
    /// "No spelling errors found!".
    pub file: Option<PathBuf>,
}
