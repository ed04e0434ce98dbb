use pretty_assertions::assert_eq;
use slotbook_core::errors::{
    AdmissionRejection, BookingError, BookingResult, CoverageError, SlotParseError,
    TimeParseError,
};
use slotbook_core::models::event::Weekday;

#[test]
fn test_booking_error_display() {
    let validation = BookingError::Validation("personPhone is not in correct format".to_string());
    let not_found = BookingError::NotFound("Event not found".to_string());
    let precondition = BookingError::PreconditionFailed("Time slot is already booked".to_string());
    let store = BookingError::StoreUnavailable(eyre::eyre!("connection refused"));
    let authentication = BookingError::Authentication("Invalid OTP".to_string());

    assert_eq!(
        validation.to_string(),
        "Validation error: personPhone is not in correct format"
    );
    assert_eq!(not_found.to_string(), "Resource not found: Event not found");
    assert_eq!(
        precondition.to_string(),
        "Precondition failed: Time slot is already booked"
    );
    assert!(store.to_string().contains("Store unavailable:"));
    assert_eq!(authentication.to_string(), "Authentication error: Invalid OTP");
}

#[test]
fn test_coverage_error_display() {
    assert_eq!(
        CoverageError::InvalidRange.to_string(),
        "End date is before start date"
    );
    assert_eq!(
        CoverageError::MissingWeekday(Weekday::Thu).to_string(),
        "Days can't be selected for the given week range: no schedule for thu"
    );
}

#[test]
fn test_admission_rejection_display() {
    assert_eq!(AdmissionRejection::EventNotFound.to_string(), "Event not exists");
    assert_eq!(
        AdmissionRejection::DateOutOfRange.to_string(),
        "Appointment date is not in event date range"
    );
    assert_eq!(
        AdmissionRejection::TimeOutsideSchedule.to_string(),
        "Appointment time is not in event time"
    );
    assert_eq!(
        AdmissionRejection::DurationMismatch.to_string(),
        "Duration of appointment time is not equal to event time slot duration"
    );
    assert_eq!(
        AdmissionRejection::OwnerMismatch.to_string(),
        "Owner of event and owner of appointment are different"
    );
}

#[test]
fn test_coverage_error_converts_transparently() {
    let err: BookingError = CoverageError::InvalidRange.into();
    assert_eq!(err.to_string(), "End date is before start date");
}

#[test]
fn test_rejection_converts_transparently() {
    let err: BookingError = AdmissionRejection::EventNotFound.into();
    assert_eq!(err.to_string(), "Event not exists");
}

#[test]
fn test_eyre_report_converts_to_store_unavailable() {
    let report = eyre::eyre!("connection refused");
    let err: BookingError = report.into();
    assert!(matches!(err, BookingError::StoreUnavailable(_)));
}

#[test]
fn test_parse_error_display() {
    assert_eq!(
        TimeParseError("9:99".to_string()).to_string(),
        "Invalid clock time: 9:99"
    );
    assert_eq!(
        SlotParseError("09:00".to_string()).to_string(),
        "Invalid time slot: 09:00"
    );
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
