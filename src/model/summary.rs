use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::day_record::DayRecord;

/// Derived view over one (year, month): recomputed on demand from the day
/// records, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "standard_days": 24.0,
        "actual_days": 21.5,
        "insufficient_days": []
    })
)]
pub struct MonthSummary {
    /// Sum of each calendar day's standard công, record or no record.
    #[schema(example = 24.0)]
    pub standard_days: f64,

    /// Sum of `work_value` over the month's records.
    #[schema(example = 21.5)]
    pub actual_days: f64,

    /// Working days that fell short of their standard, input order preserved.
    pub insufficient_days: Vec<DayRecord>,
}
