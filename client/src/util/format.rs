//! Display formatting for dates, times and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DATE: &[BorrowedFormatItem<'_>] = format_description!("[month padding:none]/[day padding:none]/[year]");
const TIME: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

/// `3/15/2024`
#[must_use]
pub fn date(value: Date) -> String {
    value.format(DATE).unwrap_or_default()
}

/// `10:30`
#[must_use]
pub fn time_of_day(value: OffsetDateTime) -> String {
    value.format(TIME).unwrap_or_default()
}

/// `3/20/2024, 10:30`
#[must_use]
pub fn date_time(value: OffsetDateTime) -> String {
    format!("{}, {}", date(value.date()), time_of_day(value))
}

/// Group thousands with commas: `12543` becomes `12,543`.
#[must_use]
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `+12.5%` / `-3.0%`
#[must_use]
pub fn growth(value: f32) -> String {
    if value >= 0.0 { format!("+{value:.1}%") } else { format!("{value:.1}%") }
}
