//! Shared components for CLI commands
//!
//! This module contains the conversion statistics type and the logging
//! setup used by the command layer.

use crate::Result;
use crate::cli::args::Args;
use tracing::debug;

/// Conversion statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of records written to the destination file
    pub records_converted: usize,
    /// Number of source lines discarded by the noise pre-filter
    /// (always zero for the non-fixed layout)
    pub lines_discarded: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging on stderr
///
/// Honors `RUST_LOG` when set; otherwise derives the level from the
/// verbosity flags. Errors always reach stderr as timestamped ERROR lines.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vpass_converter={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
