use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::attendance::MonthQuery;
use crate::data::mock;
use crate::model::{ApprovalStatus, RegistrationKind};

/// One row of the registration-slip list, display names resolved.
#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
    "date": "2024-04-11",
    "kind": "business_trip",
    "kind_name": "Công tác",
    "hours": 8.0,
    "status": "approved",
    "status_name": "Đã duyệt"
}))]
pub struct RegistrationRow {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    #[schema(example = "2024-04-11")]
    pub date: String,
    pub kind: RegistrationKind,
    #[schema(example = "Công tác")]
    pub kind_name: String,
    #[schema(example = 8.0)]
    pub hours: f64,
    pub status: ApprovalStatus,
    #[schema(example = "Đã duyệt")]
    pub status_name: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegistrationListResponse {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 4)]
    pub month: i32,
    #[schema(example = 3)]
    pub total: usize,
    pub data: Vec<RegistrationRow>,
}

/// Registration slip list endpoint
#[utoipa::path(
    get,
    path = "/api/v1/registrations",
    params(MonthQuery),
    responses(
        (status = 200, description = "Registration slips for the month", body = RegistrationListResponse),
        (status = 400, description = "Month out of range", body = Object, example = json!({
            "message": "month must be between 1 and 12"
        }))
    ),
    tag = "Registration"
)]
pub async fn list_registrations(
    query: web::Query<MonthQuery>,
) -> actix_web::Result<impl Responder> {
    if !(1..=12).contains(&query.month) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "month must be between 1 and 12"
        })));
    }

    let data: Vec<RegistrationRow> = mock::generate_month(query.year, query.month)
        .into_iter()
        .filter_map(|record| {
            record.registration.map(|slip| RegistrationRow {
                id: slip.id,
                date: record.date,
                kind: slip.kind,
                kind_name: slip.kind.display_name().to_string(),
                hours: slip.hours,
                status: slip.status,
                status_name: slip.status.display_name().to_string(),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(RegistrationListResponse {
        year: query.year,
        month: query.month,
        total: data.len(),
        data,
    }))
}
