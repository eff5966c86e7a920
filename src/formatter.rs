//! Title and keyword normalization.
//!
//! Everything here is a pure function of the raw input and a [`FormatConfig`];
//! nothing is cached between calls and nothing can fail.

use log::{debug, warn};
use regex::Regex;

use crate::config::FormatConfig;
use crate::model::{FormattedResult, RawInput};

/// Formats a raw title and keyword string according to `config`.
pub fn format(raw: &RawInput, config: &FormatConfig) -> FormattedResult {
    FormattedResult {
        title: format_title(&raw.title, config),
        keywords: format_keywords(&raw.keywords_csv, config),
    }
}

/// Cleans a title: trim, strip negative words, add prefix/suffix, truncate.
pub fn format_title(raw_title: &str, config: &FormatConfig) -> String {
    let mut title = raw_title.trim().to_string();

    if let Some(pattern) = negative_word_pattern(config.negative_title_words()) {
        let stripped = pattern.replace_all(&title, "");
        title = collapse_whitespace(&stripped);
    }

    // Prefix and suffix only decorate a title that still has content
    if !title.is_empty() {
        if !config.prefix().is_empty() {
            title = format!("{} {}", config.prefix(), title);
        }
        if !config.suffix().is_empty() {
            title = format!("{} {}", title, config.suffix());
        }
    }

    let truncated = truncate_chars(&title, config.max_title_length());
    if truncated.len() < title.len() {
        debug!("title cut to {} characters", config.max_title_length());
    }
    truncated.to_string()
}

/// Splits, filters and truncates a comma-separated keyword string.
pub fn format_keywords(keywords_csv: &str, config: &FormatConfig) -> Vec<String> {
    let negatives = config.negative_keywords();

    let tokens: Vec<&str> = split_keywords(keywords_csv).collect();
    let mut keywords: Vec<String> = tokens
        .iter()
        .filter(|keyword| negatives.is_empty() || !negatives.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
        .collect();

    if keywords.len() < tokens.len() {
        debug!("removed {} negative keyword(s)", tokens.len() - keywords.len());
    }

    if keywords.len() > config.max_tags() {
        debug!(
            "dropping {} keyword(s) over the tag limit of {}",
            keywords.len() - config.max_tags(),
            config.max_tags()
        );
        keywords.truncate(config.max_tags());
    }
    keywords
}

/// Yields the trimmed, non-empty tokens of a comma-separated string in order.
pub fn split_keywords(keywords_csv: &str) -> impl Iterator<Item = &str> {
    keywords_csv
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
}

/// Builds a case-insensitive whole-word pattern matching any of `words`.
///
/// Words are matched literally. Boundaries use ASCII word characters.
fn negative_word_pattern(words: &[String]) -> Option<Regex> {
    if words.is_empty() {
        return None;
    }

    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", alternation);

    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            // Only reachable when the word list exceeds the regex size limit
            warn!("negative title words ignored: {}", e);
            None
        }
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `text` to at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
