//! Labor-standard calendar rules.
//!
//! Months are 1-based everywhere in this crate (1 = January). Out-of-range
//! coordinates roll over instead of erroring: month 13 is January of the
//! following year, day 32 is the start of the next month. Callers that want
//! strict validation must do it before calling in here.

use chrono::{Datelike, Duration, NaiveDate};

/// Roll an arbitrary month index into (year, month 1..=12).
fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let zero_based = month - 1;
    let year = year + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) + 1;
    (year, month as u32)
}

/// First day of the (normalized) month. Always valid after normalization.
fn first_of_month(year: i32, month: i32) -> NaiveDate {
    let (y, m) = normalize_month(year, month);
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

/// Number of days in the given month (28-31).
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let first_of_next = first_of_month(year, month + 1);
    (first_of_next - Duration::days(1)).day()
}

/// Day of week for a calendar position, 0 = Sunday .. 6 = Saturday.
/// Proleptic Gregorian, no timezone involved.
pub fn day_of_week(year: i32, month: i32, day: i32) -> u32 {
    let date = first_of_month(year, month) + Duration::days(i64::from(day) - 1);
    date.weekday().num_days_from_sunday()
}

/// Standard công for a weekday:
/// Mon-Fri one full day, Saturday half (morning only), Sunday off.
pub fn standard_work_value(day_of_week: u32) -> f64 {
    match day_of_week {
        0 => 0.0,
        6 => 0.5,
        _ => 1.0,
    }
}

/// Standard required hours for a weekday (8h Mon-Fri, 4h Saturday morning).
pub fn standard_hours(day_of_week: u32) -> f64 {
    match day_of_week {
        0 => 0.0,
        6 => 4.0,
        _ => 8.0,
    }
}

/// Total standard công over every day of the month.
pub fn standard_work_days_in_month(year: i32, month: i32) -> f64 {
    (1..=days_in_month(year, month))
        .map(|day| standard_work_value(day_of_week(year, month, day as i32)))
        .sum()
}

/// Canonical `YYYY-MM-DD` form. No rollover here: the caller supplies a
/// position that is already in range.
pub fn format_date(year: i32, month: i32, day: i32) -> String {
    format!("{}-{:02}-{:02}", year, month, day)
}

/// Short Vietnamese weekday label (CN = Sunday, T2..T7 = Monday..Saturday).
pub fn day_name(day_of_week: u32) -> &'static str {
    match day_of_week {
        0 => "CN",
        1 => "T2",
        2 => "T3",
        3 => "T4",
        4 => "T5",
        5 => "T6",
        6 => "T7",
        _ => "",
    }
}
