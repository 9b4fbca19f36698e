//! Serialization of output records into the five-column statement CSV

use std::path::Path;
use tracing::info;

use crate::app::models::OutputRecord;
use crate::{Error, Result};

/// Header row of the output CSV
///
/// Purpose and Method are always written empty; they exist for manual
/// completion in the downstream finance tool.
pub const OUTPUT_HEADER: [&str; 5] = ["Date", "Item", "Amount", "Purpose", "Method"];

/// Serialize records into UTF-8 CSV bytes, header row first
///
/// Dates and items are written verbatim (quoted only when CSV rules require
/// it); amounts are plain decimal integers. Row order equals record order.
pub fn serialize_records(records: &[OutputRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(OUTPUT_HEADER)?;

        for record in records {
            writer.write_record([
                record.date.as_str(),
                record.item.as_str(),
                record.amount.to_string().as_str(),
                "",
                "",
            ])?;
        }

        writer
            .flush()
            .map_err(|e| Error::io("failed to flush output buffer", e))?;
    }
    Ok(buffer)
}

/// Serialize records and write the destination file in one call
pub fn write_statement(records: &[OutputRecord], destination: &Path) -> Result<()> {
    let buffer = serialize_records(records)?;

    std::fs::write(destination, buffer).map_err(|e| {
        Error::io(
            format!("failed to write output file {}", destination.display()),
            e,
        )
    })?;

    info!(
        "Wrote {} records to {}",
        records.len(),
        destination.display()
    );
    Ok(())
}
