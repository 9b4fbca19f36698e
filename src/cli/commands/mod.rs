//! Command implementations for the Vpass converter CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. The converter performs exactly one kind of work, so
//! there is a single conversion workflow plus the shared logging/statistics
//! plumbing.

pub mod convert;
pub mod shared;

// Re-export the main types and functions for easy access
pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner for the Vpass converter
///
/// Runs the full conversion workflow: logging setup, argument validation,
/// configuration construction, and the decode/filter/parse/write pipeline.
pub fn run(args: Args) -> Result<ConversionStats> {
    convert::run_convert(args)
}
