use serde::{Deserialize, Serialize};

/// Separator used when a keyword list is presented as a single string.
pub const KEYWORD_SEPARATOR: &str = ", ";

/// Unprocessed values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// Raw title, possibly with surrounding whitespace
    pub title: String,
    /// Comma-delimited keyword string, not yet split
    pub keywords_csv: String,
}

impl RawInput {
    pub fn new(title: impl Into<String>, keywords_csv: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            keywords_csv: keywords_csv.into(),
        }
    }
}

/// Sanitized title and keyword list ready for upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub title: String,
    /// Keywords in input order, truncated at the tag limit
    pub keywords: Vec<String>,
}

impl FormattedResult {
    /// Keywords as the comma-and-space separated string shown to users.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(KEYWORD_SEPARATOR)
    }

    /// Re-expresses the result as raw input, so it can be fed through the formatter again.
    pub fn to_raw_input(&self) -> RawInput {
        RawInput::new(self.title.clone(), self.keywords_joined())
    }
}

/// One data row of a metadata CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub filename: String,
    pub title: String,
    pub keywords: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_joined() {
        let result = FormattedResult {
            title: "Sunset".to_string(),
            keywords: vec!["sunset".to_string(), "beach".to_string()],
        };
        assert_eq!(result.keywords_joined(), "sunset, beach");
    }

    #[test]
    fn test_keywords_joined_empty() {
        assert_eq!(FormattedResult::default().keywords_joined(), "");
    }

    #[test]
    fn test_to_raw_input() {
        let result = FormattedResult {
            title: "Beach".to_string(),
            keywords: vec!["sand".to_string(), "sea".to_string()],
        };
        let raw = result.to_raw_input();
        assert_eq!(raw.title, "Beach");
        assert_eq!(raw.keywords_csv, "sand, sea");
    }

    #[test]
    fn test_formatted_result_json_shape() {
        let result = FormattedResult {
            title: "Beach".to_string(),
            keywords: vec!["sand".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["title"], "Beach");
        assert_eq!(json["keywords"][0], "sand");
    }
}
