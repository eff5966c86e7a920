use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::warn;
use std::error::Error;

use crate::model::{CsvRow, FormattedResult};

/// Fixed header line of every export
pub const CSV_HEADER: &str = "Filename,Title,Keywords,Category";

impl CsvRow {
    /// Builds the export row for a formatted result.
    pub fn from_result(result: &FormattedResult, category: &str, filename: &str) -> Self {
        CsvRow {
            filename: filename.to_string(),
            title: result.title.clone(),
            keywords: result.keywords_joined(),
            category: category.to_string(),
        }
    }

    /// Renders the row as a single CSV record with every field quoted.
    pub fn to_record(&self) -> String {
        let fields = [&self.filename, &self.title, &self.keywords, &self.category];
        match write_record(&fields) {
            Ok(record) => record,
            Err(e) => {
                // Only reachable if the csv writer rejects an in-memory buffer
                warn!("failed to write csv record: {}", e);
                String::new()
            }
        }
    }
}

/// Encodes a formatted result as a header line plus one data line.
///
/// The output has no trailing newline.
pub fn encode(result: &FormattedResult, category: &str, filename: &str) -> String {
    let row = CsvRow::from_result(result, category, filename);
    format!("{}\n{}", CSV_HEADER, row.to_record())
}

/// Writes one record with every field quoted and embedded quotes doubled.
fn write_record(fields: &[&String]) -> Result<String, Box<dyn Error>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    writer.write_record(fields)?;
    let mut record = String::from_utf8(writer.into_inner()?)?;

    if record.ends_with('\n') {
        record.pop();
    }
    Ok(record)
}
