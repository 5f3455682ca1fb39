//! Loads tokenizer/suggester overrides from an INI file. Parsing config
//! files is deliberately kept out of `spellwright_core`: the engine only
//! exposes plain setters, and this module is the one place that turns text
//! into calls against them.

use std::path::Path;

use anyhow::{Context, Result};
use spellwright_core::CheckerConfig;

pub fn apply_ini_file<P: AsRef<Path>>(config: &mut CheckerConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let ini = ini::Ini::load_from_file(path)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    if let Some(section) = ini.section(Some("tokenizer")) {
        if let Some(v) = section.get("case_sensitive").and_then(parse_bool) {
            config.tokenizer.set_case_sensitive(v);
        }
        if let Some(v) = section.get("ignore_urls").and_then(parse_bool) {
            config.tokenizer.set_ignore_urls(v);
        }
        if let Some(v) = section.get("ignore_emails").and_then(parse_bool) {
            config.tokenizer.set_ignore_emails(v);
        }
        if let Some(v) = section.get("ignore_numbers").and_then(parse_bool) {
            config.tokenizer.set_ignore_numbers(v);
        }
        if let Some(v) = section.get("min_word_length").and_then(|s| s.parse().ok()) {
            config.tokenizer.set_min_word_length(v);
        }
    }

    if let Some(section) = ini.section(Some("suggester")) {
        if let Some(v) = section.get("max_suggestions").and_then(|s| s.parse().ok()) {
            config.suggester.set_max_suggestions(v);
        }
        if let Some(v) = section
            .get("max_edit_distance")
            .and_then(|s| s.parse().ok())
        {
            config.suggester.set_max_edit_distance(v);
        }
        if let Some(v) = section
            .get("edit_distance_weight")
            .and_then(|s| s.parse().ok())
        {
            config.suggester.set_edit_distance_weight(v);
        }
        if let Some(v) = section
            .get("frequency_weight")
            .and_then(|s| s.parse().ok())
        {
            config.suggester.set_frequency_weight(v);
        }
        if let Some(v) = section
            .get("phonetic_weight")
            .and_then(|s| s.parse().ok())
        {
            config.suggester.set_phonetic_weight(v);
        }
        if let Some(v) = section.get("prefix_weight").and_then(|s| s.parse().ok()) {
            config.suggester.set_prefix_weight(v);
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
