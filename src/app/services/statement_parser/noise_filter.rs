//! Pre-filter for the fixed layout's non-data lines
//!
//! The fixed-format export interleaves cardholder header lines and summary
//! rows between billing groups. Those lines have a different column count
//! than the data rows and would break positional parsing, so they are
//! dropped before the text reaches the CSV tabulizer. The non-fixed layout
//! has no such lines and skips this stage entirely.

/// Data rows start with a four-digit year; the filter keys on its first two
/// characters
const DATA_LINE_PREFIX: &str = "20";

/// Retain only the lines that start with the literal prefix `"20"`
///
/// Line order is preserved and each retained line is newline-terminated.
/// Known limitation: a genuine data line whose date does not start with
/// "20" (another century) is dropped, and a noise line that happens to
/// start with "20" is kept and will fail later in tabulization or parsing.
pub fn filter_data_lines(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    for line in text.lines() {
        if line.starts_with(DATA_LINE_PREFIX) {
            filtered.push_str(line);
            filtered.push('\n');
        }
    }
    filtered
}
