use chrono::{DateTime, Local, Utc};

/// Money is always shown with two decimals.
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
