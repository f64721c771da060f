use crate::api::attendance::{
    CalendarResponse, InsufficientResponse, MonthQuery, SummaryResponse,
};
use crate::api::registration::{RegistrationListResponse, RegistrationRow};
use crate::model::{ApprovalStatus, DayRecord, DayStatus, MonthSummary, Registration, RegistrationKind};
use utoipa::OpenApi;
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chấm Công API",
        version = "1.0.0",
        description = r#"
## Attendance Calendar Service

Read-only API over the attendance calendar calculation engine.

### 🔹 Key Features
- **Attendance Calendar**
  - Per-day records for a month: clock times, worked hours, credited công
- **Month Summary**
  - Standard công vs actual công, weekday-dependent standards
- **Insufficient-hours Detection**
  - Working days below standard, with approved-registration override
- **Registration Slips**
  - Leave/overtime/adjustment slips with resolved display names

### 📦 Response Format
- JSON-based RESTful responses
- All endpoints take `year` and `month` (1-12) query parameters

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::month_calendar,
        crate::api::attendance::month_summary,
        crate::api::attendance::insufficient_days,

        crate::api::registration::list_registrations
    ),
    components(
        schemas(
            MonthQuery,
            CalendarResponse,
            SummaryResponse,
            InsufficientResponse,
            RegistrationListResponse,
            RegistrationRow,
            DayRecord,
            DayStatus,
            Registration,
            RegistrationKind,
            ApprovalStatus,
            MonthSummary
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance calendar and summary APIs"),
        (name = "Registration", description = "Registration slip listing APIs"),
    )
)]
pub struct ApiDoc;
