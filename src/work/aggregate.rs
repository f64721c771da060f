//! Month-level attendance aggregation.
//!
//! Everything here is total: a record whose `date` does not split into three
//! integer components is silently dropped from month-scoped results instead
//! of raising. Callers that want strict input validation do it upstream.

use crate::model::{DayRecord, DayStatus, MonthSummary};
use crate::work::calendar;

/// Lenient `YYYY-MM-DD` parse: first three dash-separated integer
/// components, extra components ignored, anything non-numeric is a miss.
fn parse_date_parts(date: &str) -> Option<(i32, i32, i32)> {
    let mut parts = date.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

/// Total công actually credited over the given records. No month filtering:
/// pre-filter with [`filter_to_month`] or use [`calculate_month_summary`].
pub fn actual_work_days(records: &[DayRecord]) -> f64 {
    records.iter().map(|record| record.work_value).sum()
}

/// Records whose date falls in (year, month), input order preserved.
pub fn filter_to_month(records: &[DayRecord], year: i32, month: i32) -> Vec<DayRecord> {
    records
        .iter()
        .filter(|record| {
            matches!(parse_date_parts(&record.date), Some((y, m, _)) if y == year && m == month)
        })
        .cloned()
        .collect()
}

/// Working days of the month whose credited công and raw hours both fall
/// short of the standard. The standard is recomputed from each record's own
/// date, not trusted from the record. A `work_value` at or above the
/// standard exempts the day: an approved registration slip that already
/// credited the day overrides a low clock-hours reading.
pub fn insufficient_days(records: &[DayRecord], year: i32, month: i32) -> Vec<DayRecord> {
    records
        .iter()
        .filter(|record| {
            let Some((r_year, r_month, r_day)) = parse_date_parts(&record.date) else {
                return false;
            };
            if r_year != year || r_month != month {
                return false;
            }

            let day_of_week = calendar::day_of_week(r_year, r_month, r_day);
            let standard_hours = calendar::standard_hours(day_of_week);

            // Sundays have no standard to fall short of.
            if standard_hours == 0.0 {
                return false;
            }

            if matches!(
                record.status,
                DayStatus::Leave | DayStatus::Off | DayStatus::Holiday
            ) {
                return false;
            }

            if record.work_value >= calendar::standard_work_value(day_of_week) {
                return false;
            }

            record.hours_worked < standard_hours
        })
        .cloned()
        .collect()
}

/// Month summary: calendar-derived standard, credited actual over the
/// month's records, and the under-standard days.
pub fn calculate_month_summary(records: &[DayRecord], year: i32, month: i32) -> MonthSummary {
    let month_records = filter_to_month(records, year, month);

    MonthSummary {
        standard_days: calendar::standard_work_days_in_month(year, month),
        actual_days: actual_work_days(&month_records),
        insufficient_days: insufficient_days(records, year, month),
    }
}
