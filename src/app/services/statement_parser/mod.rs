//! Statement parser for Vpass CSV exports
//!
//! This module turns the raw bytes of a Vpass statement export into typed
//! source records. The input side of the pipeline lives here: decoding the
//! legacy encoding, discarding the noise lines the fixed layout injects,
//! tabulizing the CSV text, and mapping positional columns into records.
//!
//! ## Architecture
//!
//! - [`decoder`] - Shift-JIS to Unicode decoding
//! - [`noise_filter`] - pre-filter for the fixed layout's non-data lines
//! - [`parser`] - orchestration: decode, filter, tabulize, parse rows
//! - [`row_parser`] - positional column mapping into [`SourceRecord`]s
//! - [`stats`] - parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use vpass_converter::app::services::statement_parser::StatementParser;
//! use vpass_converter::app::models::SourceFormat;
//!
//! # fn example() -> vpass_converter::Result<()> {
//! let parser = StatementParser::new(SourceFormat::Fixed);
//! let result = parser.parse_file(std::path::Path::new("meisai.csv"))?;
//!
//! println!("Parsed {} records", result.stats.records_parsed);
//! # Ok(())
//! # }
//! ```
//!
//! [`SourceRecord`]: crate::app::models::SourceRecord

pub mod decoder;
pub mod noise_filter;
pub mod parser;
pub mod row_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::decode_shift_jis;
pub use noise_filter::filter_data_lines;
pub use parser::StatementParser;
pub use stats::{ParseResult, ParseStats};
