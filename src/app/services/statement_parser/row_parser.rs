//! Positional row parsing for both statement layouts
//!
//! This module maps a tabulized CSV row into a typed [`SourceRecord`] using
//! the column indices supplied by the selected [`SourceFormat`]. The amount
//! field is the only one that is validated; every other field passes through
//! verbatim.

use csv::StringRecord;

use crate::app::models::{SourceFormat, SourceRecord};
use crate::{Error, Result};

/// Parse one tabulized row into a source record
///
/// `row` is the 1-based index of the record within the filtered/tabulized
/// row sequence, used only for error reporting.
///
/// For the fixed layout, a non-empty method tag in the last column is
/// appended to the item label with a single space while the record is
/// built; the record mapper downstream stays a pure identity.
pub fn parse_source_record(
    record: &StringRecord,
    format: SourceFormat,
    row: usize,
) -> Result<SourceRecord> {
    let date = require_field(record, format.date_column(), row)?;
    let label = require_field(record, format.label_column(), row)?;
    let raw_amount = require_field(record, format.amount_column(), row)?;
    let amount = parse_amount(raw_amount, row)?;

    let shop_name = match format.method_tag_column().and_then(|index| record.get(index)) {
        Some(tag) if !tag.is_empty() => format!("{label} {tag}"),
        _ => label.to_string(),
    };

    Ok(SourceRecord::new(date, shop_name, amount))
}

/// Get a required field by column index
fn require_field<'a>(record: &'a StringRecord, index: usize, row: usize) -> Result<&'a str> {
    record.get(index).ok_or_else(|| {
        Error::malformed_csv(
            format!(
                "row {} has {} fields, but column {} is required",
                row,
                record.len(),
                index
            ),
            None,
        )
    })
}

/// Parse the amount field as a base-10 integer
///
/// The raw text is not trimmed or normalized: thousands separators, signs
/// with whitespace, and full-width digits all fail, and the offending value
/// is preserved in the error for diagnosis.
fn parse_amount(raw: &str, row: usize) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| Error::field_parse(row, "amount", raw))
}
