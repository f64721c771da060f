//! Generated demo attendance data.
//!
//! Stands in for the real record-store feed so the API can be exercised
//! without credentials. Generation is a fixed day-of-month pattern rather
//! than an RNG so responses and tests are reproducible: a leave day, a late
//! day, an under-hours day and a slip-credited day recur through the month,
//! Sundays are auto-off, everything else is full attendance.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::model::{ApprovalStatus, DayRecord, DayStatus, Registration, RegistrationKind};
use crate::work::{calendar, clock};

/// One month of demo records, 1-based month. Days after today are omitted,
/// like the live calendar the dashboard shows mid-month.
pub fn generate_month(year: i32, month: i32) -> Vec<DayRecord> {
    generate_month_as_of(year, month, Local::now().date_naive())
}

pub(crate) fn generate_month_as_of(year: i32, month: i32, today: NaiveDate) -> Vec<DayRecord> {
    let mut records = Vec::new();

    for day in 1..=calendar::days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month as u32, day) else {
            continue;
        };
        if date > today {
            continue;
        }

        let day = day as i32;
        let day_of_week = calendar::day_of_week(year, month, day);
        let date_str = calendar::format_date(year, month, day);
        let std_hours = calendar::standard_hours(day_of_week);
        let std_value = calendar::standard_work_value(day_of_week);

        if day_of_week == 0 {
            records.push(DayRecord {
                date: date_str,
                hours_worked: 0.0,
                status: DayStatus::Off,
                work_value: 0.0,
                check_in: None,
                check_out: None,
                note: Some("Chủ nhật - Nghỉ".to_string()),
                registration: None,
            });
            continue;
        }

        records.push(match day % 13 {
            4 => DayRecord {
                date: date_str,
                hours_worked: 0.0,
                status: DayStatus::Leave,
                work_value: 0.0,
                check_in: None,
                check_out: None,
                note: Some("Nghỉ phép".to_string()),
                registration: Some(slip(RegistrationKind::Leave, std_hours)),
            },
            7 => clocked(
                date_str,
                DayStatus::Late,
                "10:00",
                if day_of_week == 6 { "12:00" } else { "17:30" },
                std_hours,
                None,
                Some("Đi trễ".to_string()),
            ),
            9 => {
                let check_out = if day_of_week == 6 { "11:00" } else { "14:00" };
                let hours = clock::actual_hours("08:00", check_out, std_hours, true);
                clocked(
                    date_str,
                    DayStatus::Normal,
                    "08:00",
                    check_out,
                    std_hours,
                    None,
                    Some(format!("Làm {}h", hours)),
                )
            }
            // Short clock hours, but an approved slip credits the full
            // standard công for the day.
            11 => {
                let mut record = clocked(
                    date_str,
                    DayStatus::Normal,
                    "08:00",
                    "11:00",
                    std_hours,
                    Some(std_value),
                    Some("Công tác - đã duyệt bù công".to_string()),
                );
                record.registration = Some(slip(RegistrationKind::BusinessTrip, std_hours));
                record
            }
            _ => clocked(
                date_str,
                DayStatus::Normal,
                "08:00",
                if day_of_week == 6 { "12:00" } else { "17:00" },
                std_hours,
                Some(std_value),
                if day_of_week == 6 {
                    Some("Sáng thứ 7".to_string())
                } else {
                    None
                },
            ),
        });
    }

    records
}

/// Build a day record from clock readings. `credit` overrides the derived
/// work value; without it the value is the capped hours divided by a full
/// 8-hour day.
fn clocked(
    date: String,
    status: DayStatus,
    check_in: &str,
    check_out: &str,
    std_hours: f64,
    credit: Option<f64>,
    note: Option<String>,
) -> DayRecord {
    let hours_worked = clock::actual_hours(check_in, check_out, std_hours, true);
    let work_value = credit.unwrap_or(hours_worked / 8.0);

    DayRecord {
        date,
        hours_worked,
        status,
        work_value,
        check_in: Some(check_in.to_string()),
        check_out: Some(check_out.to_string()),
        note,
        registration: None,
    }
}

fn slip(kind: RegistrationKind, hours: f64) -> Registration {
    Registration {
        id: Uuid::new_v4(),
        kind,
        hours,
        status: ApprovalStatus::Approved,
    }
}
