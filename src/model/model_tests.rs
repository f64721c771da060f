// src/model/model_tests.rs

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::model::{ApprovalStatus, DayStatus, RegistrationKind};

    #[test]
    fn registration_kind_from_code_covers_known_option_set_values() {
        assert_eq!(RegistrationKind::from_code(191920000), RegistrationKind::Leave);
        assert_eq!(
            RegistrationKind::from_code(191920001),
            RegistrationKind::WorkFromHome
        );
        assert_eq!(
            RegistrationKind::from_code(191920002),
            RegistrationKind::Overtime
        );
        assert_eq!(
            RegistrationKind::from_code(191920003),
            RegistrationKind::BusinessTrip
        );
        assert_eq!(
            RegistrationKind::from_code(191920004),
            RegistrationKind::LateOrEarly
        );
        assert_eq!(
            RegistrationKind::from_code(283640001),
            RegistrationKind::UnpaidLeave
        );
    }

    #[test]
    fn registration_kind_from_code_is_total() {
        assert_eq!(RegistrationKind::from_code(0), RegistrationKind::Other);
        assert_eq!(RegistrationKind::from_code(-1), RegistrationKind::Other);
        assert_eq!(
            RegistrationKind::from_code(999999999),
            RegistrationKind::Other
        );
    }

    #[test]
    fn registration_kind_display_names() {
        assert_eq!(RegistrationKind::Leave.display_name(), "Nghỉ phép");
        assert_eq!(RegistrationKind::Overtime.display_name(), "Tăng ca");
        assert_eq!(RegistrationKind::BusinessTrip.display_name(), "Công tác");
        assert_eq!(RegistrationKind::Other.display_name(), "Khác");
    }

    #[test]
    fn approval_status_display_names() {
        assert_eq!(ApprovalStatus::Pending.display_name(), "Chờ duyệt");
        assert_eq!(ApprovalStatus::Approved.display_name(), "Đã duyệt");
        assert_eq!(ApprovalStatus::Rejected.display_name(), "Từ chối");
    }

    #[test]
    fn day_status_round_trips_through_strings() {
        assert_eq!(DayStatus::from_str("leave").unwrap(), DayStatus::Leave);
        assert_eq!(DayStatus::from_str("normal").unwrap(), DayStatus::Normal);
        assert!(DayStatus::from_str("vacation").is_err());

        assert_eq!(DayStatus::Holiday.to_string(), "holiday");
    }

    #[test]
    fn enums_serialize_in_wire_casing() {
        assert_eq!(
            serde_json::to_value(RegistrationKind::BusinessTrip).unwrap(),
            "business_trip"
        );
        assert_eq!(serde_json::to_value(DayStatus::Late).unwrap(), "late");
        assert_eq!(
            serde_json::to_value(ApprovalStatus::Approved).unwrap(),
            "approved"
        );
    }
}
