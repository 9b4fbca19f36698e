//! Data models for Vpass statement conversion
//!
//! This module contains the core data structures for representing the two
//! Vpass statement export layouts and the typed records that flow through
//! the conversion pipeline.

use serde::{Deserialize, Serialize};

// =============================================================================
// Source Format
// =============================================================================

/// The two statement layouts Vpass exports.
///
/// The format is selected once at startup and supplies everything that is
/// layout-specific: the positional column mapping used by the row parser and
/// whether the noise pre-filter applies before tabulization. Nothing else in
/// the pipeline branches on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SourceFormat {
    /// Fixed billing-cycle export: cardholder billing groups, each preceded
    /// by a non-data header line, followed by 7-column data rows. The last
    /// column optionally carries a payment-method tag.
    Fixed,
    /// Non-fixed billing-cycle export: a flat sequence of 13-column data
    /// rows with no interleaved header lines.
    NonFixed,
}

impl SourceFormat {
    /// Select the format from the CLI's boolean selector (true = fixed)
    pub fn from_fixed_flag(is_fixed: bool) -> Self {
        if is_fixed {
            SourceFormat::Fixed
        } else {
            SourceFormat::NonFixed
        }
    }

    /// Column index of the transaction date
    pub fn date_column(&self) -> usize {
        0
    }

    /// Column index of the merchant/item label
    pub fn label_column(&self) -> usize {
        1
    }

    /// Column index of the amount field
    pub fn amount_column(&self) -> usize {
        match self {
            SourceFormat::Fixed => 2,
            SourceFormat::NonFixed => 6,
        }
    }

    /// Column index of the optional payment-method tag, if the layout has one
    pub fn method_tag_column(&self) -> Option<usize> {
        match self {
            SourceFormat::Fixed => Some(6),
            SourceFormat::NonFixed => None,
        }
    }

    /// Whether the noise pre-filter applies to this layout
    pub fn requires_noise_filter(&self) -> bool {
        matches!(self, SourceFormat::Fixed)
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Fixed => write!(f, "fixed"),
            SourceFormat::NonFixed => write!(f, "non-fixed"),
        }
    }
}

// =============================================================================
// Pipeline Records
// =============================================================================

/// One transaction parsed from a source data row.
///
/// The date is carried verbatim as exported (`YYYY/MM/DD` or `YYYY/M/D`); it
/// is never parsed as a calendar date. For fixed-format rows with a non-empty
/// method tag, `shop_name` already contains the space-joined label/tag merge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceRecord {
    /// Transaction date, free-form text
    pub date: String,

    /// Merchant or item label, full-width characters preserved verbatim
    pub shop_name: String,

    /// Transaction amount in yen
    pub amount: i64,
}

impl SourceRecord {
    /// Create a new source record
    pub fn new(date: impl Into<String>, shop_name: impl Into<String>, amount: i64) -> Self {
        Self {
            date: date.into(),
            shop_name: shop_name.into(),
            amount,
        }
    }
}

/// One row of the normalized output CSV.
///
/// Purpose and Method columns exist only in the serialized output, always
/// written empty for manual completion downstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputRecord {
    /// Transaction date, copied verbatim from the source record
    pub date: String,

    /// Item label, copied verbatim from the source record
    pub item: String,

    /// Transaction amount in yen
    pub amount: i64,
}

impl OutputRecord {
    /// Derive an output record from a source record (identity mapping)
    pub fn from_source(record: &SourceRecord) -> Self {
        Self {
            date: record.date.clone(),
            item: record.shop_name.clone(),
            amount: record.amount,
        }
    }
}
