use time::macros::{date, datetime};

use super::*;

#[test]
fn dates_drop_leading_zeros() {
    assert_eq!(date(date!(2024-03-05)), "3/5/2024");
    assert_eq!(date(date!(2024-12-25)), "12/25/2024");
}

#[test]
fn date_time_joins_date_and_clock() {
    assert_eq!(date_time(datetime!(2024-03-20 09:05 UTC)), "3/20/2024, 09:05");
    assert_eq!(time_of_day(datetime!(2024-03-20 15:45 UTC)), "15:45");
}

#[test]
fn count_groups_thousands() {
    assert_eq!(count(0), "0");
    assert_eq!(count(999), "999");
    assert_eq!(count(1_000), "1,000");
    assert_eq!(count(12_543), "12,543");
    assert_eq!(count(1_234_567), "1,234,567");
}

#[test]
fn growth_is_signed() {
    assert_eq!(growth(12.5), "+12.5%");
    assert_eq!(growth(-3.0), "-3.0%");
}
