//! Core statement parser implementation
//!
//! This module provides the parser orchestration: reading the source file,
//! decoding, applying the layout's pre-filter, tabulizing the CSV text, and
//! dispatching each row to the positional row parser.

use std::path::Path;
use tracing::{debug, info};

use super::decoder::decode_shift_jis;
use super::noise_filter::filter_data_lines;
use super::row_parser::parse_source_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::SourceFormat;
use crate::{Error, Result};

/// Statement parser for Vpass CSV exports
///
/// The parser is a single pass with no recovery: the first decode,
/// tabulization, or field failure aborts the run so that no partial result
/// can ever reach the writer.
#[derive(Debug, Clone, Copy)]
pub struct StatementParser {
    format: SourceFormat,
}

impl StatementParser {
    /// Create a parser for the given source layout
    pub fn new(format: SourceFormat) -> Self {
        Self { format }
    }

    /// Read, decode, and parse a statement file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!(
            "Parsing {} statement: {}",
            self.format,
            file_path.display()
        );

        let bytes = std::fs::read(file_path).map_err(|e| {
            Error::io(
                format!("failed to read source file {}", file_path.display()),
                e,
            )
        })?;

        let text = decode_shift_jis(&bytes)?;
        self.parse_text(&text)
    }

    /// Parse decoded statement text into source records
    pub fn parse_text(&self, text: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        stats.source_lines = text.lines().count();

        // The fixed layout needs its noise lines stripped before the CSV
        // reader sees the text; the non-fixed layout passes through as-is
        let filtered;
        let data_text = if self.format.requires_noise_filter() {
            filtered = filter_data_lines(text);
            stats.lines_discarded = stats.source_lines - filtered.lines().count();
            debug!(
                "Noise filter discarded {} of {} source lines",
                stats.lines_discarded, stats.source_lines
            );
            filtered.as_str()
        } else {
            text
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data_text.as_bytes());

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            // 1-based, counted within the filtered/tabulized sequence
            let row = index + 1;
            let record = result
                .map_err(|e| Error::malformed_csv(format!("failed to read row {}", row), Some(e)))?;
            records.push(parse_source_record(&record, self.format, row)?);
        }

        stats.records_parsed = records.len();
        info!("Parsed {} records", stats.records_parsed);

        Ok(ParseResult { records, stats })
    }
}
