//! Interactive REPL: `<word>` checks a word, plus `add <word>`,
//! `remove <word>`, `stats`, `quit`/`exit` and `help` commands.

use std::io::{BufRead, Write};

use spellwright_core::Checker;

const HELP_TEXT: &str = "\
commands:
  <word>          check a word
  add <word>      add a word to the dictionary
  remove <word>   remove a word from the dictionary
  stats           print (word_count, memory_bytes/1024) KB
  help            show this message
  quit, exit      leave the session";

pub fn run<R: BufRead, W: Write>(checker: &mut Checker, input: R, mut output: W) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command {
            "quit" | "exit" => break,
            "help" => writeln!(output, "{HELP_TEXT}")?,
            "stats" => print_stats(checker, &mut output)?,
            "add" if !rest.is_empty() => {
                checker.add_word(rest);
                writeln!(output, "added \"{rest}\"")?;
            }
            "remove" if !rest.is_empty() => {
                if checker.remove_word(rest) {
                    writeln!(output, "removed \"{rest}\"")?;
                } else {
                    writeln!(output, "\"{rest}\" was not in the dictionary")?;
                }
            }
            word => check_word(checker, word, &mut output)?,
        }
    }
    Ok(())
}

fn check_word<W: Write>(checker: &Checker, word: &str, output: &mut W) -> anyhow::Result<()> {
    if checker.is_correct(word) {
        writeln!(output, "\"{word}\" is spelled correctly.")?;
    } else {
        let suggestions: Vec<String> = checker
            .suggest(word)
            .into_iter()
            .map(|s| s.word)
            .collect();
        writeln!(
            output,
            "Word: \"{word}\" - Suggestions: {}",
            suggestions.join(", ")
        )?;
    }
    Ok(())
}

fn print_stats<W: Write>(checker: &Checker, output: &mut W) -> anyhow::Result<()> {
    let (word_count, approx_memory_bytes) = checker.stats();
    writeln!(
        output,
        "({word_count}, {}) KB",
        approx_memory_bytes / 1024
    )?;
    Ok(())
}
