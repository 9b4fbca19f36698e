//! Tests for the fixed-layout noise pre-filter

use super::fixed_statement_text;
use crate::app::services::statement_parser::noise_filter::filter_data_lines;

#[test]
fn test_filter_keeps_only_data_lines() {
    let filtered = filter_data_lines(fixed_statement_text());

    let lines: Vec<&str> = filtered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("2022/08/05"));
    assert!(lines[1].starts_with("2022/08/15"));
    assert!(lines[2].starts_with("2022/08/18"));
}

#[test]
fn test_filter_preserves_line_order_and_termination() {
    let filtered = filter_data_lines("2022/08/05,a,1\nnoise\n2022/08/15,b,2\n");
    assert_eq!(filtered, "2022/08/05,a,1\n2022/08/15,b,2\n");
}

#[test]
fn test_filter_drops_summary_rows_starting_with_comma() {
    let filtered = filter_data_lines(",,,,,123456\n,,,,,123456,\n");
    assert_eq!(filtered, "");
}

#[test]
fn test_filter_drops_other_century_dates() {
    // Documented limitation: the prefix heuristic excludes dates outside 20xx
    let filtered = filter_data_lines("1999/12/31,store,100\n2022/01/01,store,200\n");
    assert_eq!(filtered, "2022/01/01,store,200\n");
}

#[test]
fn test_filter_keeps_any_line_with_the_prefix() {
    // A non-data line starting with "20" survives the filter; it fails
    // later during tabulization or parsing instead
    let filtered = filter_data_lines("20XX not a data line\n");
    assert_eq!(filtered, "20XX not a data line\n");
}

#[test]
fn test_filter_empty_input() {
    assert_eq!(filter_data_lines(""), "");
}
