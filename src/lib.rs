//! Vpass Converter Library
//!
//! A Rust library for converting credit-card transaction statements exported
//! from the Vpass portal into a normalized UTF-8 CSV suitable for personal
//! finance imports.
//!
//! This library provides tools for:
//! - Decoding the Shift-JIS statement exports into Unicode text
//! - Filtering the non-data noise lines injected into fixed-format exports
//! - Parsing both statement layouts (fixed and non-fixed billing cycles)
//!   into typed records by positional column mapping
//! - Writing the normalized 5-column output CSV with a fixed header row

pub mod config;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod output_writer;
        pub mod statement_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{OutputRecord, SourceFormat, SourceRecord};
pub use config::Config;

/// Result type alias for the Vpass converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for statement conversion operations
///
/// Every variant is fatal for the run: the converter has no partial-success
/// mode, no row-skipping, and no retry. Each error carries enough context
/// (originating stage, and for field failures the 1-based row number and the
/// offending raw value) for the user to fix the source file and re-run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration error (missing required flag, invalid argument)
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source bytes are not valid Shift-JIS
    #[error("decode error: {message}")]
    Decode { message: String },

    /// CSV tabulization failed (unbalanced quoting, inconsistent field counts)
    #[error("malformed CSV: {message}")]
    MalformedCsv {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A field failed to parse; carries the 1-based row index within the
    /// filtered/tabulized row sequence and the raw text for diagnosis
    #[error("failed to parse {field} \"{value}\" at row {row}")]
    FieldParse {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a malformed-CSV error with context
    pub fn malformed_csv(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::MalformedCsv {
            message: message.into(),
            source,
        }
    }

    /// Create a field-parse error for the given row and raw value
    pub fn field_parse(row: usize, field: &'static str, value: impl Into<String>) -> Self {
        Self::FieldParse {
            row,
            field,
            value: value.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::MalformedCsv {
            message: "CSV tabulization failed".to_string(),
            source: Some(error),
        }
    }
}
