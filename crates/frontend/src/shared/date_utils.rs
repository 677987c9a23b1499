//! Utilities for date and time formatting
//!
//! Timestamps arrive as server-local `LocalDateTime` values, so no time zone
//! conversion happens here.

use chrono::NaiveDateTime;

/// Format to DD/MM/YYYY HH:MM
/// Example: 2024-03-15T14:02:26 -> "15/03/2024 14:02"
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Format to DD/MM/YYYY
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// Format to HH:MM
pub fn format_time(value: &NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

/// Optional timestamps render as an empty string
pub fn format_datetime_opt(value: Option<&NaiveDateTime>) -> String {
    value.map(format_datetime).unwrap_or_default()
}
