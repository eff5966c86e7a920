//! UniFFI bindings for stockmeta
//!
//! This module provides FFI-compatible types and functions so mobile and desktop
//! front ends can call the formatter directly. Every exported function is total.

use crate::config::{parse_limit, parse_word_list, DEFAULT_MAX_TAGS, DEFAULT_MAX_TITLE_LENGTH};
use crate::{FormatConfig, FormattedResult, InputCounters, RawInput};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// Form field values, passed through exactly as typed
///
/// Limits are text so that blank or non-numeric entries can fall back to the defaults.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFormatConfig {
    /// Maximum number of keywords (default 50)
    pub max_tags: String,
    /// Maximum title length in characters (default 200)
    pub max_title_length: String,
    pub prefix: String,
    pub suffix: String,
    /// Comma-separated keywords to drop
    pub negative_keywords: String,
    /// Comma-separated words to strip from the title
    pub negative_title_words: String,
}

impl From<FfiFormatConfig> for FormatConfig {
    fn from(ffi: FfiFormatConfig) -> Self {
        FormatConfig::new(
            parse_limit(&ffi.max_tags, DEFAULT_MAX_TAGS),
            parse_limit(&ffi.max_title_length, DEFAULT_MAX_TITLE_LENGTH),
            &ffi.prefix,
            &ffi.suffix,
            parse_word_list(&ffi.negative_keywords),
            parse_word_list(&ffi.negative_title_words),
        )
    }
}

/// FFI-compatible formatting result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFormattedResult {
    pub title: String,
    /// Keywords in order
    pub keywords: Vec<String>,
    /// Keywords joined with ", " for display
    pub keywords_joined: String,
}

impl From<FormattedResult> for FfiFormattedResult {
    fn from(result: FormattedResult) -> Self {
        FfiFormattedResult {
            keywords_joined: result.keywords_joined(),
            title: result.title,
            keywords: result.keywords,
        }
    }
}

impl From<FfiFormattedResult> for FormattedResult {
    fn from(ffi: FfiFormattedResult) -> Self {
        FormattedResult {
            title: ffi.title,
            keywords: ffi.keywords,
        }
    }
}

/// Live counters for the input as typed
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiInputCounters {
    pub title_chars: u64,
    pub tag_count: u64,
    pub title_over: bool,
    pub tags_over: bool,
}

/// Format a raw title and keyword string
///
/// # Arguments
/// * `title` - The raw title
/// * `keywords` - Comma-separated keywords
/// * `config` - Optional form values (defaults apply when not specified)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_metadata(
    title: String,
    keywords: String,
    config: Option<FfiFormatConfig>,
) -> FfiFormattedResult {
    let config: FormatConfig = config.unwrap_or_default().into();
    crate::format(&RawInput::new(title, keywords), &config).into()
}

/// Encode an already formatted result as a metadata CSV
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn encode_csv(result: FfiFormattedResult, category: String, filename: String) -> String {
    crate::encode(&result.into(), &category, &filename)
}

/// Format the input and encode it as a metadata CSV in one call
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn export_csv(
    title: String,
    keywords: String,
    category: String,
    filename: String,
    config: Option<FfiFormatConfig>,
) -> String {
    let result = format_metadata(title, keywords, config);
    encode_csv(result, category, filename)
}

/// Count characters and tags of the input as typed
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn count_input(
    title: String,
    keywords: String,
    config: Option<FfiFormatConfig>,
) -> FfiInputCounters {
    let config: FormatConfig = config.unwrap_or_default().into();
    let counters = InputCounters::measure(&RawInput::new(title, keywords));
    let status = counters.exceeds(&config);

    FfiInputCounters {
        title_chars: counters.title_chars as u64,
        tag_count: counters.tag_count as u64,
        title_over: status.title_over,
        tags_over: status.tags_over,
    }
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_uses_defaults() {
        let config: FormatConfig = FfiFormatConfig::default().into();
        assert_eq!(config, FormatConfig::default());
    }

    #[test]
    fn test_form_values_are_parsed() {
        let config: FormatConfig = FfiFormatConfig {
            max_tags: "2".to_string(),
            max_title_length: "abc".to_string(),
            negative_keywords: "Cat, ".to_string(),
            ..Default::default()
        }
        .into();
        assert_eq!(config.max_tags(), 2);
        assert_eq!(config.max_title_length(), 200);
        assert_eq!(config.negative_keywords(), ["cat"]);
    }

    #[test]
    fn test_format_metadata() {
        let config = FfiFormatConfig {
            prefix: "Best".to_string(),
            negative_title_words: "car".to_string(),
            ..Default::default()
        };
        let result = format_metadata("Car".to_string(), "a, b".to_string(), Some(config));
        assert_eq!(result.title, "");
        assert_eq!(result.keywords_joined, "a, b");
    }

    #[test]
    fn test_export_csv() {
        let csv = export_csv(
            "Sunset".to_string(),
            "sun".to_string(),
            "Nature".to_string(),
            "Image_01.jpg".to_string(),
            None,
        );
        assert_eq!(
            csv,
            "Filename,Title,Keywords,Category\n\"Image_01.jpg\",\"Sunset\",\"sun\",\"Nature\""
        );
    }

    #[test]
    fn test_count_input() {
        let counters = count_input("Sunset".to_string(), "a, b, c".to_string(), None);
        assert_eq!(counters.title_chars, 6);
        assert_eq!(counters.tag_count, 3);
        assert!(!counters.title_over);
        assert!(!counters.tags_over);
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
