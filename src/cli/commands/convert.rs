//! Convert command implementation for the Vpass converter CLI
//!
//! This module contains the complete conversion workflow: configuration
//! construction from CLI arguments, the decode/filter/parse pipeline, and
//! writing the normalized output file.

use super::shared::{ConversionStats, setup_logging};
use crate::app::models::OutputRecord;
use crate::app::services::output_writer::write_statement;
use crate::app::services::statement_parser::StatementParser;
use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;
use std::time::Instant;
use tracing::{debug, error, info};

/// Convert command runner for the Vpass converter
///
/// This function orchestrates the whole run:
/// 1. Set up logging
/// 2. Validate arguments and build the run configuration
/// 3. Run the conversion pipeline
/// 4. Report summary statistics
pub fn run_convert(args: Args) -> Result<ConversionStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting Vpass statement conversion");
    debug!("Command line arguments: {:?}", args);

    let result = args
        .validate()
        .and_then(|_| Config::from_args(&args))
        .and_then(|config| {
            info!(
                "Converting {} ({} layout) to {}",
                config.source_path.display(),
                config.format,
                config.destination_path.display()
            );
            convert_statement(config)
        });

    match result {
        Ok(mut stats) => {
            stats.processing_time = start_time.elapsed();
            info!(
                "Conversion complete: {} records written, {} noise lines discarded, {:.2?}",
                stats.records_converted, stats.lines_discarded, stats.processing_time
            );
            Ok(stats)
        }
        Err(e) => {
            error!("conversion failed: {}", e);
            Err(e)
        }
    }
}

/// Run one conversion described by `config`
///
/// This is the pure pipeline entry point: it touches nothing outside the
/// two paths named in the configuration, holds no process-wide state, and
/// either writes the complete destination file or returns an error with no
/// output left behind. The whole source file is buffered in memory before
/// parsing begins; statement exports are at most a few hundred rows.
pub fn convert_statement(config: Config) -> Result<ConversionStats> {
    let parser = StatementParser::new(config.format);
    let parse_result = parser.parse_file(&config.source_path)?;

    // Identity mapping into the output schema; the fixed-format label merge
    // already happened while the rows were parsed
    let output_records: Vec<OutputRecord> = parse_result
        .records
        .iter()
        .map(OutputRecord::from_source)
        .collect();

    write_statement(&output_records, &config.destination_path)?;

    Ok(ConversionStats {
        records_converted: output_records.len(),
        lines_discarded: parse_result.stats.lines_discarded,
        ..Default::default()
    })
}
