//! Command-line argument definitions for the Vpass converter
//!
//! This module defines the CLI interface using the clap derive API. The
//! converter is a single-purpose tool, so there are no subcommands: one
//! invocation performs one conversion.

use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the Vpass statement converter
///
/// Converts a credit-card transaction statement exported from the Vpass
/// portal (Shift-JIS CSV) into a normalized UTF-8 CSV for personal finance
/// imports.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vpass-converter",
    version,
    about = "Convert Vpass credit-card statement CSV exports into a normalized UTF-8 CSV",
    long_about = "Converts a credit-card transaction statement exported from the Vpass portal \
                  into a normalized five-column CSV (Date, Item, Amount, Purpose, Method) for \
                  import into a personal finance tool. Handles both export layouts, decodes the \
                  Shift-JIS source encoding, and strips the non-data noise lines the fixed \
                  layout mixes into its export."
)]
pub struct Args {
    /// Path of the transaction statement CSV downloaded from Vpass
    ///
    /// Required for a conversion. Declared optional here so that a missing
    /// path is reported through the converter's own error path (logged,
    /// exit code 1) rather than as a usage error.
    #[arg(
        long = "src",
        value_name = "FILE",
        help = "Path of the transaction statement CSV downloaded from Vpass"
    )]
    pub src: Option<PathBuf>,

    /// Output CSV file path
    ///
    /// Defaults to the source path with its extension replaced by
    /// `-converted.csv`, in the same directory as the source.
    #[arg(
        long = "dst",
        value_name = "FILE",
        help = "Output CSV file path (default: <src without extension>-converted.csv)"
    )]
    pub dst: Option<PathBuf>,

    /// Source layout selector
    ///
    /// Vpass exports two statement layouts: fixed billing cycle (7-column
    /// rows grouped per cardholder, with injected non-data header lines)
    /// and non-fixed billing cycle (flat 13-column rows). Pass
    /// `--srcfixed false` for the non-fixed layout.
    #[arg(
        long = "srcfixed",
        value_name = "BOOL",
        default_value_t = true,
        action = clap::ArgAction::Set,
        help = "Whether the source uses the fixed billing-cycle layout"
    )]
    pub srcfixed: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // An explicitly empty path is treated like a missing one
        if let Some(src) = &self.src {
            if src.as_os_str().is_empty() {
                return Err(Error::configuration(
                    "specify the source file path with --src",
                ));
            }
        }

        if let Some(dst) = &self.dst {
            if dst.as_os_str().is_empty() {
                return Err(Error::configuration(
                    "--dst requires a non-empty file path",
                ));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vpass-converter"]);
        assert_eq!(args.src, None);
        assert_eq!(args.dst, None);
        assert!(args.srcfixed);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_srcfixed_takes_explicit_value() {
        let args = Args::parse_from(["vpass-converter", "--src", "a.csv", "--srcfixed", "false"]);
        assert!(!args.srcfixed);

        let args = Args::parse_from(["vpass-converter", "--src", "a.csv", "--srcfixed=true"]);
        assert!(args.srcfixed);
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let mut args = Args::parse_from(["vpass-converter"]);
        assert!(args.validate().is_ok());

        args.src = Some(PathBuf::new());
        assert!(args.validate().is_err());

        args.src = Some(PathBuf::from("meisai.csv"));
        args.dst = Some(PathBuf::new());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::parse_from(["vpass-converter"]);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
