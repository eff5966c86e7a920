//! Title and keyword formatting for stock-media submissions.
//!
//! The two core operations are [`format`], which turns a raw title and a
//! comma-separated keyword string into an upload-ready [`FormattedResult`],
//! and [`encode`], which renders that result as a one-row metadata CSV.
//!
//! ```
//! use stockmeta::{encode, format, FormatConfig, RawInput};
//!
//! let config = FormatConfig::new(3, 200, "", "", ["ocean"], Vec::<String>::new());
//! let raw = RawInput::new("  Beautiful Sunset Beach  ", "sunset, ocean, beach, sand, sky");
//!
//! let result = format(&raw, &config);
//! assert_eq!(result.title, "Beautiful Sunset Beach");
//! assert_eq!(result.keywords_joined(), "sunset, beach, sand");
//!
//! let csv = encode(&result, "Nature", "Image_01.jpg");
//! assert!(csv.starts_with("Filename,Title,Keywords,Category\n"));
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod counters;
pub mod csv_export;
pub mod error;
pub mod formatter;
pub mod model;
pub mod uniffi_bindings;

pub use builder::{MetadataFormatter, MetadataFormatterBuilder};
pub use config::{FormatConfig, Settings};
pub use counters::{InputCounters, LimitStatus};
pub use csv_export::{encode, CSV_HEADER};
pub use error::StockMetaError;
pub use formatter::format;
pub use model::{CsvRow, FormattedResult, RawInput};

// Re-export UniFFI functions at crate root for scaffolding
#[cfg(feature = "uniffi")]
pub use uniffi_bindings::*;
