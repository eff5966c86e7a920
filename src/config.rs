use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Tag limit used when none (or an unusable one) is configured
pub const DEFAULT_MAX_TAGS: usize = 50;
/// Title length limit used when none (or an unusable one) is configured
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
/// Placeholder written into the CSV `Filename` column
pub const DEFAULT_FILENAME: &str = "Image_01.jpg";
/// Name of the optional settings file looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "stockmeta";
/// Prefix for environment overrides, e.g. `STOCKMETA__MAX_TAGS=30`
pub const ENV_PREFIX: &str = "STOCKMETA";

/// Formatting constraints for a single formatter invocation.
///
/// All constructors normalize their input: limits are always positive,
/// prefix and suffix are trimmed, and negative word lists are lower-cased,
/// trimmed and free of empty or duplicate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    max_tags: usize,
    max_title_length: usize,
    prefix: String,
    suffix: String,
    negative_keywords: Vec<String>,
    negative_title_words: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_tags: DEFAULT_MAX_TAGS,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            prefix: String::new(),
            suffix: String::new(),
            negative_keywords: Vec::new(),
            negative_title_words: Vec::new(),
        }
    }
}

impl FormatConfig {
    /// Creates a config from already-typed values.
    ///
    /// A limit of zero falls back to its default.
    pub fn new<K, T>(
        max_tags: usize,
        max_title_length: usize,
        prefix: &str,
        suffix: &str,
        negative_keywords: K,
        negative_title_words: T,
    ) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        Self {
            max_tags: positive_or(max_tags, DEFAULT_MAX_TAGS),
            max_title_length: positive_or(max_title_length, DEFAULT_MAX_TITLE_LENGTH),
            prefix: prefix.trim().to_string(),
            suffix: suffix.trim().to_string(),
            negative_keywords: normalize_words(negative_keywords),
            negative_title_words: normalize_words(negative_title_words),
        }
    }

    pub fn max_tags(&self) -> usize {
        self.max_tags
    }

    pub fn max_title_length(&self) -> usize {
        self.max_title_length
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn negative_keywords(&self) -> &[String] {
        &self.negative_keywords
    }

    pub fn negative_title_words(&self) -> &[String] {
        &self.negative_title_words
    }
}

fn positive_or(value: usize, default: usize) -> usize {
    if value == 0 {
        default
    } else {
        value
    }
}

/// Parses a limit typed into a text field.
///
/// Leading and trailing whitespace is ignored and only the leading run of
/// digits (after an optional sign) is read, so `"12abc"` gives 12 and `"3.7"`
/// gives 3. Blank, non-numeric, zero and negative input yield `default`.
pub fn parse_limit(text: &str, default: usize) -> usize {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return default;
    }

    match digits.parse::<usize>() {
        Ok(0) => default,
        Ok(value) => value,
        // More digits than fit; still a positive number
        Err(_) => usize::MAX,
    }
}

/// Splits a comma-separated word list and normalizes each entry.
pub fn parse_word_list(text: &str) -> Vec<String> {
    normalize_words(text.split(','))
}

/// Lower-cases and trims words, dropping blanks and repeats.
///
/// The order of first occurrence is kept.
pub fn normalize_words<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if !word.is_empty() && !normalized.contains(&word) {
            normalized.push(word);
        }
    }
    normalized
}

/// A limit as it may appear in a settings file, the environment or a form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LimitValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl LimitValue {
    /// Resolves the value to a positive limit, falling back to `default`.
    pub fn resolve(&self, default: usize) -> usize {
        match self {
            LimitValue::Integer(value) => usize::try_from(*value)
                .ok()
                .filter(|value| *value > 0)
                .unwrap_or(default),
            LimitValue::Float(value) if value.is_finite() && *value >= 1.0 => {
                value.trunc() as usize
            }
            LimitValue::Float(_) | LimitValue::Bool(_) => default,
            LimitValue::Text(text) => parse_limit(text, default),
        }
    }
}

/// One scalar entry of a word list.
///
/// Environment parsing and TOML both turn `2023` or `true` into non-string
/// values; they are read back as the text that was written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WordEntry {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl WordEntry {
    pub fn to_text(&self) -> String {
        match self {
            WordEntry::Text(text) => text.clone(),
            WordEntry::Integer(value) => value.to_string(),
            WordEntry::Float(value) => value.to_string(),
            WordEntry::Bool(value) => value.to_string(),
        }
    }
}

/// A negative word list, either comma-separated or as a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WordList {
    List(Vec<WordEntry>),
    Single(WordEntry),
}

impl Default for WordList {
    fn default() -> Self {
        WordList::Single(WordEntry::Text(String::new()))
    }
}

impl From<String> for WordList {
    fn from(text: String) -> Self {
        WordList::Single(WordEntry::Text(text))
    }
}

impl WordList {
    pub fn words(&self) -> Vec<String> {
        match self {
            WordList::List(entries) => normalize_words(entries.iter().map(WordEntry::to_text)),
            WordList::Single(entry) => parse_word_list(&entry.to_text()),
        }
    }
}

/// Loosely typed settings, layered from file, environment and command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of keywords kept
    pub max_tags: Option<LimitValue>,
    /// Maximum title length in characters
    pub max_title_length: Option<LimitValue>,
    /// Text placed before a non-empty title
    pub prefix: String,
    /// Text placed after a non-empty title
    pub suffix: String,
    /// Keywords dropped on exact (case-insensitive) match
    pub negative_keywords: WordList,
    /// Words removed from the title on whole-word match
    pub negative_title_words: WordList,
    /// CSV `Category` column
    pub category: String,
    /// CSV `Filename` column, defaults to [`DEFAULT_FILENAME`]
    pub filename: Option<String>,
}

impl Settings {
    /// Applies the defaulting rules and returns the normalized config.
    pub fn format_config(&self) -> FormatConfig {
        let max_tags = self
            .max_tags
            .as_ref()
            .map_or(DEFAULT_MAX_TAGS, |limit| limit.resolve(DEFAULT_MAX_TAGS));
        let max_title_length = self
            .max_title_length
            .as_ref()
            .map_or(DEFAULT_MAX_TITLE_LENGTH, |limit| {
                limit.resolve(DEFAULT_MAX_TITLE_LENGTH)
            });

        FormatConfig::new(
            max_tags,
            max_title_length,
            &self.prefix,
            &self.suffix,
            self.negative_keywords.words(),
            self.negative_title_words.words(),
        )
    }

    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or(DEFAULT_FILENAME)
    }

    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with STOCKMETA__ prefix
    /// 2. `path` if given (must exist), otherwise stockmeta.toml in the current directory
    /// 3. Default values
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_settings(path, ENV_PREFIX)
    }
}

/// Load settings using an explicit environment prefix
///
/// Environment variable format: `<PREFIX>__MAX_TAGS`, `<PREFIX>__NEGATIVE_KEYWORDS`
pub fn load_settings(path: Option<&Path>, env_prefix: &str) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        // Optional settings file (can be missing)
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    log::debug!("loaded settings: {:?}", settings);
    Ok(settings)
}
