use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration slip category. The record store exposes these as option-set
/// integer codes; `from_code` is total, unknown codes collapse into `Other`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RegistrationKind {
    Leave,
    WorkFromHome,
    Overtime,
    BusinessTrip,
    LateOrEarly,
    UnpaidLeave,
    Other,
}

impl RegistrationKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            191920000 => RegistrationKind::Leave,
            191920001 => RegistrationKind::WorkFromHome,
            191920002 => RegistrationKind::Overtime,
            191920003 => RegistrationKind::BusinessTrip,
            191920004 => RegistrationKind::LateOrEarly,
            283640001 => RegistrationKind::UnpaidLeave,
            _ => RegistrationKind::Other,
        }
    }

    /// Display label shown on the registration list.
    pub fn display_name(&self) -> &'static str {
        match self {
            RegistrationKind::Leave => "Nghỉ phép",
            RegistrationKind::WorkFromHome => "Làm ở nhà",
            RegistrationKind::Overtime => "Tăng ca",
            RegistrationKind::BusinessTrip => "Công tác",
            RegistrationKind::LateOrEarly => "Đi trễ/Về sớm",
            RegistrationKind::UnpaidLeave => "Nghỉ không lương",
            RegistrationKind::Other => "Khác",
        }
    }
}

/// Supervisor approval state of a registration slip.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Chờ duyệt",
            ApprovalStatus::Approved => "Đã duyệt",
            ApprovalStatus::Rejected => "Từ chối",
        }
    }
}

/// An approved (or pending) leave/overtime/adjustment request attached to a
/// day record. Crediting its hours into the day's `work_value` happens
/// upstream; the aggregator only ever compares `work_value` to the standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "kind": "overtime",
        "hours": 8.0,
        "status": "approved"
    })
)]
pub struct Registration {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,

    #[schema(example = "overtime")]
    pub kind: RegistrationKind,

    /// Hours granted by the slip.
    #[schema(example = 8.0)]
    pub hours: f64,

    #[schema(example = "approved")]
    pub status: ApprovalStatus,
}
