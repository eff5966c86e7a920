use crate::config::{FormatConfig, DEFAULT_MAX_TAGS, DEFAULT_MAX_TITLE_LENGTH};
use crate::{csv_export, formatter, FormattedResult, RawInput};

/// Builder for a reusable [`MetadataFormatter`]
#[derive(Debug, Default)]
pub struct MetadataFormatterBuilder {
    max_tags: Option<usize>,
    max_title_length: Option<usize>,
    prefix: String,
    suffix: String,
    negative_keywords: Vec<String>,
    negative_title_words: Vec<String>,
}

impl MetadataFormatterBuilder {
    /// Start from an existing config, replacing every field set so far
    ///
    /// # Example
    /// ```
    /// use stockmeta::{FormatConfig, MetadataFormatter};
    ///
    /// let formatter = MetadataFormatter::builder()
    ///     .config(&FormatConfig::default())
    ///     .build();
    /// assert_eq!(formatter.config().max_tags(), 50);
    /// ```
    pub fn config(mut self, config: &FormatConfig) -> Self {
        self.max_tags = Some(config.max_tags());
        self.max_title_length = Some(config.max_title_length());
        self.prefix = config.prefix().to_string();
        self.suffix = config.suffix().to_string();
        self.negative_keywords = config.negative_keywords().to_vec();
        self.negative_title_words = config.negative_title_words().to_vec();
        self
    }

    /// Set the maximum number of keywords kept (0 means the default)
    ///
    /// # Example
    /// ```
    /// use stockmeta::MetadataFormatter;
    ///
    /// let formatter = MetadataFormatter::builder().max_tags(3).build();
    /// let result = formatter.format("Beach", "a, b, c, d");
    /// assert_eq!(result.keywords, vec!["a", "b", "c"]);
    /// ```
    pub fn max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = Some(max_tags);
        self
    }

    /// Set the maximum title length in characters (0 means the default)
    pub fn max_title_length(mut self, max_title_length: usize) -> Self {
        self.max_title_length = Some(max_title_length);
        self
    }

    /// Set the text placed before non-empty titles
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the text placed after non-empty titles
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set keywords to drop on exact, case-insensitive match
    ///
    /// # Example
    /// ```
    /// use stockmeta::MetadataFormatter;
    ///
    /// let formatter = MetadataFormatter::builder()
    ///     .negative_keywords(["cat"])
    ///     .build();
    /// let result = formatter.format("Pets", "Cat, Catalog, Dog");
    /// assert_eq!(result.keywords_joined(), "Catalog, Dog");
    /// ```
    pub fn negative_keywords<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.negative_keywords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set words to strip from titles on whole-word, case-insensitive match
    pub fn negative_title_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.negative_title_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Normalize the collected options into a formatter
    pub fn build(self) -> MetadataFormatter {
        let config = FormatConfig::new(
            self.max_tags.unwrap_or(DEFAULT_MAX_TAGS),
            self.max_title_length.unwrap_or(DEFAULT_MAX_TITLE_LENGTH),
            &self.prefix,
            &self.suffix,
            self.negative_keywords,
            self.negative_title_words,
        );
        MetadataFormatter { config }
    }
}

/// Formats submissions with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct MetadataFormatter {
    config: FormatConfig,
}

impl MetadataFormatter {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use stockmeta::MetadataFormatter;
    ///
    /// let builder = MetadataFormatter::builder();
    /// ```
    pub fn builder() -> MetadataFormatterBuilder {
        MetadataFormatterBuilder::default()
    }

    pub fn new(config: FormatConfig) -> Self {
        MetadataFormatter { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format a raw title and comma-separated keyword string
    pub fn format(&self, title: &str, keywords_csv: &str) -> FormattedResult {
        formatter::format(&RawInput::new(title, keywords_csv), &self.config)
    }

    /// Format the input and encode it as a metadata CSV
    pub fn to_csv(&self, title: &str, keywords_csv: &str, category: &str, filename: &str) -> String {
        let result = self.format(title, keywords_csv);
        csv_export::encode(&result, category, filename)
    }
}
