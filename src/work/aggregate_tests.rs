// src/work/aggregate_tests.rs

#[cfg(test)]
mod tests {
    use crate::model::{DayRecord, DayStatus};
    use crate::work::aggregate::*;
    use crate::work::calendar;

    fn record(date: &str, hours_worked: f64, status: DayStatus, work_value: f64) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            hours_worked,
            status,
            work_value,
            check_in: None,
            check_out: None,
            note: None,
            registration: None,
        }
    }

    #[test]
    fn actual_work_days_sums_without_month_filtering() {
        let records = vec![
            record("2024-04-01", 8.0, DayStatus::Normal, 1.0),
            record("2024-05-02", 4.0, DayStatus::Normal, 0.5),
            record("2023-12-29", 8.0, DayStatus::Normal, 1.0),
        ];
        assert_eq!(actual_work_days(&records), 2.5);
        assert_eq!(actual_work_days(&[]), 0.0);
    }

    #[test]
    fn filter_to_month_keeps_only_matching_dates() {
        let records = vec![
            record("2024-04-01", 8.0, DayStatus::Normal, 1.0),
            record("2024-05-01", 8.0, DayStatus::Normal, 1.0),
            record("2023-04-01", 8.0, DayStatus::Normal, 1.0),
            record("2024-04-15", 8.0, DayStatus::Normal, 1.0),
        ];
        let filtered = filter_to_month(&records, 2024, 4);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date, "2024-04-01");
        assert_eq!(filtered[1].date, "2024-04-15");
    }

    #[test]
    fn filter_to_month_silently_drops_malformed_dates() {
        let records = vec![
            record("2024-13-01", 8.0, DayStatus::Normal, 1.0), // month 13 matches nothing
            record("2024-04", 8.0, DayStatus::Normal, 1.0),    // two components
            record("2024-ab-01", 8.0, DayStatus::Normal, 1.0), // non-numeric
            record("", 8.0, DayStatus::Normal, 1.0),
            record("2024-04-05-junk", 8.0, DayStatus::Normal, 1.0), // extras ignored
        ];
        let filtered = filter_to_month(&records, 2024, 4);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2024-04-05-junk");
    }

    #[test]
    fn leave_off_and_holiday_days_are_never_insufficient() {
        // 2024-04-02 is a Tuesday, standard 8h; zero hours worked
        let records = vec![
            record("2024-04-02", 0.0, DayStatus::Leave, 0.0),
            record("2024-04-03", 0.0, DayStatus::Off, 0.0),
            record("2024-04-04", 0.0, DayStatus::Holiday, 0.0),
        ];
        assert!(insufficient_days(&records, 2024, 4).is_empty());
    }

    #[test]
    fn sunday_cannot_be_insufficient() {
        // 2024-04-07 is a Sunday: no standard to fall short of
        let records = vec![record("2024-04-07", 0.0, DayStatus::Normal, 0.0)];
        assert!(insufficient_days(&records, 2024, 4).is_empty());
    }

    #[test]
    fn credited_work_value_overrides_low_clock_hours() {
        // Tuesday with only 3h on the clock, but an approved slip already
        // raised the credited value to the full standard.
        let records = vec![record("2024-04-02", 3.0, DayStatus::Normal, 1.0)];
        assert!(insufficient_days(&records, 2024, 4).is_empty());
    }

    #[test]
    fn under_standard_weekday_is_flagged() {
        // Monday, standard (1 công, 8h); 0.4 công and 5h both short
        let records = vec![record("2024-04-01", 5.0, DayStatus::Normal, 0.4)];
        let flagged = insufficient_days(&records, 2024, 4);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, "2024-04-01");
    }

    #[test]
    fn saturday_uses_the_half_day_standard() {
        // 2024-04-06 is a Saturday: standard 0.5 công / 4h
        let short = vec![record("2024-04-06", 3.0, DayStatus::Normal, 0.25)];
        assert_eq!(insufficient_days(&short, 2024, 4).len(), 1);

        let credited = vec![record("2024-04-06", 3.0, DayStatus::Normal, 0.5)];
        assert!(insufficient_days(&credited, 2024, 4).is_empty());

        let full_hours = vec![record("2024-04-06", 4.0, DayStatus::Normal, 0.4)];
        assert!(insufficient_days(&full_hours, 2024, 4).is_empty());
    }

    #[test]
    fn standard_is_recomputed_from_the_record_date() {
        // Day 32 of March normalizes to April 1st, a Monday with an 8h
        // standard; the record's own numbers are not trusted for that.
        let records = vec![record("2024-03-32", 5.0, DayStatus::Normal, 0.4)];
        assert!(insufficient_days(&records, 2024, 4).is_empty()); // month mismatch: date says 3
        let flagged = insufficient_days(&records, 2024, 3);
        assert_eq!(flagged.len(), 1);
    }

    #[test]
    fn insufficient_days_preserve_input_order() {
        let records = vec![
            record("2024-04-03", 5.0, DayStatus::Normal, 0.5),
            record("2024-04-01", 5.0, DayStatus::Normal, 0.5),
            record("2024-04-02", 8.0, DayStatus::Normal, 1.0),
        ];
        let flagged = insufficient_days(&records, 2024, 4);
        let dates: Vec<&str> = flagged.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-04-03", "2024-04-01"]);
    }

    #[test]
    fn month_summary_is_idempotent() {
        let records = vec![
            record("2024-04-01", 8.0, DayStatus::Normal, 1.0),
            record("2024-04-02", 5.0, DayStatus::Late, 0.6),
        ];
        let first = calculate_month_summary(&records, 2024, 4);
        let second = calculate_month_summary(&records, 2024, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn month_summary_ignores_records_from_other_months() {
        let records = vec![
            record("2024-04-01", 8.0, DayStatus::Normal, 1.0),
            record("2024-05-01", 8.0, DayStatus::Normal, 1.0),
            record("bad-date", 8.0, DayStatus::Normal, 1.0),
        ];
        let summary = calculate_month_summary(&records, 2024, 4);
        assert_eq!(summary.actual_days, 1.0);
        assert!(summary.insufficient_days.is_empty());
    }

    #[test]
    fn full_april_2024_reaches_the_standard_exactly() {
        let mut records = Vec::new();
        for day in 1..=30 {
            let date = calendar::format_date(2024, 4, day);
            match calendar::day_of_week(2024, 4, day) {
                0 => records.push(record(&date, 0.0, DayStatus::Off, 0.0)),
                6 => records.push(record(&date, 4.0, DayStatus::Normal, 0.5)),
                _ => records.push(record(&date, 8.0, DayStatus::Normal, 1.0)),
            }
        }

        let summary = calculate_month_summary(&records, 2024, 4);
        assert_eq!(summary.standard_days, 24.0);
        assert_eq!(summary.actual_days, 24.0);
        assert!(summary.insufficient_days.is_empty());
    }
}
