//! Output writer for the normalized statement CSV
//!
//! Serializes the converted records into the fixed five-column schema and
//! writes the destination file. Serialization happens entirely in memory
//! first; the file is then written in a single call, so a failure anywhere
//! earlier can never leave a partially written output behind.

pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use writer::{OUTPUT_HEADER, serialize_records, write_statement};
