//! Clock-string arithmetic. Total functions: every input, including empty or
//! garbage strings, maps to a defined output.

use chrono::{DateTime, NaiveDateTime};

/// Minutes since midnight for an `HH:MM`-leading clock string.
fn clock_minutes(value: &str) -> Option<i32> {
    let mut parts = value.split(':');
    let hours: i32 = parts.next()?.trim().parse().ok()?;
    let minutes: i32 = parts.next()?.trim().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Worked hours between two `HH:MM` clock readings, rounded to one decimal.
///
/// A negative span is treated as a single midnight wraparound. With `capped`
/// the result is clamped to `standard_hours`: overtime beyond the standard
/// is a registration concern handled upstream, not counted here. Missing or
/// unparseable readings yield 0.
pub fn actual_hours(check_in: &str, check_out: &str, standard_hours: f64, capped: bool) -> f64 {
    if check_in.is_empty() || check_out.is_empty() {
        return 0.0;
    }

    let (Some(start), Some(end)) = (clock_minutes(check_in), clock_minutes(check_out)) else {
        return 0.0;
    };

    let mut total_minutes = end - start;
    if total_minutes < 0 {
        total_minutes += 24 * 60;
    }

    let raw_hours = (f64::from(total_minutes) / 60.0 * 10.0).round() / 10.0;

    if capped {
        raw_hours.min(standard_hours)
    } else {
        raw_hours
    }
}

/// Zero-padded `HH:MM` from either an already clock-like string ("8:30",
/// "08:30:00") or a full timestamp ("2024-04-01T08:30:00Z"). Empty string
/// for anything unparseable.
pub fn time_of_day(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    if let Some(clock) = leading_clock(value) {
        return clock;
    }

    let parsed = DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"));

    match parsed {
        Ok(timestamp) => timestamp.format("%H:%M").to_string(),
        Err(_) => String::new(),
    }
}

/// `H:MM` or `HH:MM` prefix, re-padded. Mirrors the loose prefix match the
/// check-in/check-out fields have always been stored with.
fn leading_clock(value: &str) -> Option<String> {
    let (head, tail) = value.split_once(':')?;
    if head.is_empty() || head.len() > 2 || !head.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let minutes: String = tail.chars().take(2).collect();
    if minutes.len() != 2 || !minutes.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = head.parse().ok()?;
    Some(format!("{:02}:{}", hours, minutes))
}
