pub mod day_record;
pub mod registration;
pub mod summary;

mod model_tests;

pub use day_record::{DayRecord, DayStatus};
pub use registration::{ApprovalStatus, Registration, RegistrationKind};
pub use summary::MonthSummary;
