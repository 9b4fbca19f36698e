//! Test utilities and fixtures for statement parser testing
//!
//! The fixture texts mirror real Vpass exports: the fixed layout with its
//! interleaved cardholder header lines and summary rows, and the flat
//! 13-column non-fixed layout.

use csv::StringRecord;

mod noise_filter_tests;

/// Decoded fixed-layout statement: two billing groups with injected
/// cardholder header lines, plus trailing summary rows
pub fn fixed_statement_text() -> &'static str {
    "大村　幸佑　様,0000-0000-0000-0***,ＶＩＳＡ\n\
     2022/08/05,ヨドバシカメラ　通信販売,4853,１,１,4853,\n\
     2022/08/15,ＡＭＡＺＯＮ．ＣＯ．ＪＰ,3400,１,１,3400,\n\
     大村　幸佑　様,0000-0000-0000-0***,ＡｐｐｌｅＰａｙ／ｉＤ\n\
     2022/08/18,ファミリーマート／ｉＤ,340,１,１,340,ﾌｱﾐﾘ-ﾏ-ﾄ/ID\n\
     ,,,,,123456\n\
     ,,,,,123456,\n"
}

/// Decoded non-fixed-layout statement: flat 13-column data rows
pub fn non_fixed_statement_text() -> &'static str {
    "2022/7/4,ＡＭＡＺＯＮ．ＣＯ．ＪＰ,ご家族,1回払い,,'22/08,3844,3844,,,,,\n\
     2022/7/13,東京都水道局,ご家族,1回払い,,'22/08,8459,8459,,,,,\n\
     2022/7/16,セブン－イレブン／ｉＤ,ご家族,1回払い,,'22/08,98,98,,,,,\n\
     2022/7/19,メルカリ,ご家族,1回払い,,'22/08,2700,2700,,,,,\n"
}

/// Helper to build a tabulized row from string fields
pub fn record_from(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}
