//! Tests for the output writer


use crate::app::models::OutputRecord;

/// Records matching a converted non-fixed statement
pub fn sample_records() -> Vec<OutputRecord> {
    vec![
        OutputRecord {
            date: "2022/7/4".to_string(),
            item: "ＡＭＡＺＯＮ．ＣＯ．ＪＰ".to_string(),
            amount: 3844,
        },
        OutputRecord {
            date: "2022/7/13".to_string(),
            item: "東京都水道局".to_string(),
            amount: 8459,
        },
        OutputRecord {
            date: "2022/7/16".to_string(),
            item: "セブン－イレブン／ｉＤ".to_string(),
            amount: 98,
        },
        OutputRecord {
            date: "2022/7/19".to_string(),
            item: "メルカリ".to_string(),
            amount: 2700,
        },
    ]
}
