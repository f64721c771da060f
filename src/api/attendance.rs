use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::data::mock;
use crate::model::DayRecord;
use crate::work::aggregate;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct MonthQuery {
    /// Calendar year
    #[schema(example = 2024)]
    pub year: i32,
    /// Calendar month, 1-12
    #[schema(example = 4)]
    pub month: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CalendarResponse {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 4)]
    pub month: i32,
    pub days: Vec<DayRecord>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "year": 2024,
    "month": 4,
    "standard_days": 24.0,
    "actual_days": 21.5,
    "insufficient_days": []
}))]
pub struct SummaryResponse {
    pub year: i32,
    pub month: i32,
    /// Công chuẩn: calendar-derived, independent of which records exist
    pub standard_days: f64,
    /// Công thực tế: credited over the month's records
    pub actual_days: f64,
    pub insufficient_days: Vec<DayRecord>,
}

#[derive(Serialize, ToSchema)]
pub struct InsufficientResponse {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 4)]
    pub month: i32,
    #[schema(example = 2)]
    pub total: usize,
    pub days: Vec<DayRecord>,
}

// The engine itself normalizes out-of-range months; the HTTP boundary is
// where strict validation lives.
fn validate_month(month: i32) -> Result<(), HttpResponse> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "month must be between 1 and 12"
        })))
    }
}

/// Month calendar endpoint
#[utoipa::path(
    get,
    path = "/api/v1/attendance/calendar",
    params(MonthQuery),
    responses(
        (status = 200, description = "Day records for the month", body = CalendarResponse),
        (status = 400, description = "Month out of range", body = Object, example = json!({
            "message": "month must be between 1 and 12"
        }))
    ),
    tag = "Attendance"
)]
pub async fn month_calendar(query: web::Query<MonthQuery>) -> actix_web::Result<impl Responder> {
    if let Err(resp) = validate_month(query.month) {
        return Ok(resp);
    }

    let days = mock::generate_month(query.year, query.month);

    Ok(HttpResponse::Ok().json(CalendarResponse {
        year: query.year,
        month: query.month,
        days,
    }))
}

/// Month summary endpoint
#[utoipa::path(
    get,
    path = "/api/v1/attendance/summary",
    params(MonthQuery),
    responses(
        (status = 200, description = "Standard vs actual công plus under-standard days", body = SummaryResponse),
        (status = 400, description = "Month out of range", body = Object, example = json!({
            "message": "month must be between 1 and 12"
        }))
    ),
    tag = "Attendance"
)]
pub async fn month_summary(query: web::Query<MonthQuery>) -> actix_web::Result<impl Responder> {
    if let Err(resp) = validate_month(query.month) {
        return Ok(resp);
    }

    let records = mock::generate_month(query.year, query.month);
    let summary = aggregate::calculate_month_summary(&records, query.year, query.month);

    Ok(HttpResponse::Ok().json(SummaryResponse {
        year: query.year,
        month: query.month,
        standard_days: summary.standard_days,
        actual_days: summary.actual_days,
        insufficient_days: summary.insufficient_days,
    }))
}

/// Insufficient-hours days endpoint
#[utoipa::path(
    get,
    path = "/api/v1/attendance/insufficient",
    params(MonthQuery),
    responses(
        (status = 200, description = "Working days that fell short of the standard", body = InsufficientResponse),
        (status = 400, description = "Month out of range", body = Object, example = json!({
            "message": "month must be between 1 and 12"
        }))
    ),
    tag = "Attendance"
)]
pub async fn insufficient_days(query: web::Query<MonthQuery>) -> actix_web::Result<impl Responder> {
    if let Err(resp) = validate_month(query.month) {
        return Ok(resp);
    }

    let records = mock::generate_month(query.year, query.month);
    let days = aggregate::insufficient_days(&records, query.year, query.month);

    Ok(HttpResponse::Ok().json(InsufficientResponse {
        year: query.year,
        month: query.month,
        total: days.len(),
        days,
    }))
}
