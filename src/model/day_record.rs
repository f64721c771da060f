use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::registration::Registration;

/// Mutually exclusive classification of one attendance day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DayStatus {
    Normal,
    Late,
    Leave,
    Off,
    Holiday,
    Warning,
}

/// One calendar day's attendance outcome, already normalized by whatever
/// upstream source produced it (record store row or generated demo data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2024-04-01",
        "hours_worked": 8.0,
        "status": "normal",
        "work_value": 1.0,
        "check_in": "08:00",
        "check_out": "17:00",
        "note": null,
        "registration": null
    })
)]
pub struct DayRecord {
    /// Canonical `YYYY-MM-DD`. Kept as text: upstream data may be malformed
    /// and malformed dates are dropped during aggregation, not rejected here.
    #[schema(example = "2024-04-01")]
    pub date: String,

    #[schema(example = 8.0)]
    pub hours_worked: f64,

    #[schema(example = "normal")]
    pub status: DayStatus,

    /// Công credited for the day; 0, 0.5 or 1 normally, possibly above the
    /// day's standard when an approved registration grants extra credit.
    #[schema(example = 1.0)]
    pub work_value: f64,

    #[schema(example = "08:00", nullable = true)]
    pub check_in: Option<String>,

    #[schema(example = "17:00", nullable = true)]
    pub check_out: Option<String>,

    #[schema(example = "Sáng thứ 7", nullable = true)]
    pub note: Option<String>,

    /// Approved leave/overtime/adjustment slip affecting this day, if any.
    #[schema(nullable = true)]
    pub registration: Option<Registration>,
}
