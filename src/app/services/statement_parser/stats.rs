//! Parsing statistics and result structures

use crate::app::models::SourceRecord;

/// Statistics collected while parsing one statement
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Lines in the decoded source text
    pub source_lines: usize,
    /// Lines discarded by the noise pre-filter (zero for the non-fixed
    /// layout, which has no pre-filter)
    pub lines_discarded: usize,
    /// Data rows parsed into records
    pub records_parsed: usize,
}

impl ParseStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of parsing one statement: the records plus statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed source records, in source order
    pub records: Vec<SourceRecord>,
    /// Parsing statistics
    pub stats: ParseStats,
}
