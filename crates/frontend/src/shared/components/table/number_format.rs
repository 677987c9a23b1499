//! vi-VN number formatting for table cells and captions
//!
//! Thousands are separated by `.` and decimals by `,`, matching what
//! `Intl.NumberFormat('vi-VN')` prints.

/// Formats a number with `.` thousands separators and up to `max_decimals`
/// fraction digits (trailing zeros dropped)
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_vi;
/// assert_eq!(format_number_vi(1234567.0, 0), "1.234.567");
/// assert_eq!(format_number_vi(1234.5, 2), "1.234,5");
/// ```
pub fn format_number_vi(value: f64, max_decimals: u8) -> String {
    let formatted = match max_decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.3}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Group digits from the right
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    // "-0" after rounding reads as plain zero
    let sign = if grouped.chars().all(|c| c == '0' || c == '.') && decimal_part.is_empty() {
        ""
    } else {
        sign
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, decimal_part)
    }
}

/// Money amount in đồng, no fraction digits: `1.250.000`
pub fn format_money(value: f64) -> String {
    format_number_vi(value, 0)
}

/// Integer counts
pub fn format_number_int(value: f64) -> String {
    format_number_vi(value, 0)
}

/// Percent value without the `%` sign: `10`, `12,5`
pub fn format_percent(value: f64) -> String {
    format_number_vi(value, 2)
}
