//! Display helpers

use chrono::NaiveDate;

/// Shown for a receipt whose date cell could not be read
pub const INVALID_DATE: &str = "Invalid Date";

/// `Jan 5, 2025`
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// `1 receipt`, `3 receipts`
pub fn receipt_count_label(count: usize) -> String {
    if count == 1 {
        "1 receipt".to_string()
    } else {
        format!("{} receipts", count)
    }
}
