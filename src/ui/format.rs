//! Small display formatting helpers.

use chrono::{DateTime, Datelike, Utc};

/// Uppercases the first character.
///
/// # Examples
///
/// ```
/// use artauction::ui::format::capitalize;
///
/// assert_eq!(capitalize("pending"), "Pending");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Formats a timestamp as a US short date, `M/D/YYYY`.
#[must_use]
pub fn format_submitted(at: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", at.month(), at.day(), at.year())
}

/// Groups digits in threes with commas, as the dashboard stat cards do.
///
/// # Examples
///
/// ```
/// use artauction::ui::format::format_count;
///
/// assert_eq!(format_count(1234567), "1,234,567");
/// assert_eq!(format_count(-980), "-980");
/// ```
#[must_use]
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
