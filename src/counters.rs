use crate::config::FormatConfig;
use crate::formatter::split_keywords;
use crate::model::RawInput;

/// Live counters for input as typed, before any formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCounters {
    /// Characters in the raw title, surrounding whitespace included
    pub title_chars: usize,
    /// Non-blank comma-separated keyword tokens
    pub tag_count: usize,
}

/// Whether each counter is above its configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitStatus {
    pub title_over: bool,
    pub tags_over: bool,
}

impl LimitStatus {
    pub fn any(&self) -> bool {
        self.title_over || self.tags_over
    }
}

impl InputCounters {
    pub fn measure(raw: &RawInput) -> Self {
        InputCounters {
            title_chars: raw.title.chars().count(),
            tag_count: split_keywords(&raw.keywords_csv).count(),
        }
    }

    pub fn exceeds(&self, config: &FormatConfig) -> LimitStatus {
        LimitStatus {
            title_over: self.title_chars > config.max_title_length(),
            tags_over: self.tag_count > config.max_tags(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_raw_input() {
        let raw = RawInput::new("  Sunset  ", "sun, , sea,");
        let counters = InputCounters::measure(&raw);
        assert_eq!(counters.title_chars, 10);
        assert_eq!(counters.tag_count, 2);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let counters = InputCounters::measure(&RawInput::new("Żółw", ""));
        assert_eq!(counters.title_chars, 4);
        assert_eq!(counters.tag_count, 0);
    }

    #[test]
    fn test_exceeds() {
        let config = FormatConfig::new(2, 5, "", "", Vec::<String>::new(), Vec::<String>::new());
        let status = InputCounters::measure(&RawInput::new("Sunset", "a, b")).exceeds(&config);
        assert!(status.title_over);
        assert!(!status.tags_over);
        assert!(status.any());

        let status = InputCounters::measure(&RawInput::new("Sun", "a")).exceeds(&config);
        assert!(!status.any());
    }
}
