use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

use slotbook_api::validation::{
    validate_appointment_request, validate_email, validate_event_fields, validate_signup,
};
use slotbook_core::errors::BookingError;
use slotbook_core::models::appointment::AppointmentRequest;
use slotbook_core::models::event::{DaySchedule, WeekSchedule, Weekday};
use slotbook_core::models::user::{LoginType, SignupRequest};
use slotbook_core::time::ClockTime;

fn ct(s: &str) -> ClockTime {
    s.parse().expect("valid clock time")
}

fn day(start: &str, end: &str) -> DaySchedule {
    DaySchedule {
        start_time: ct(start),
        end_time: ct(end),
        break_start: None,
        break_end: None,
    }
}

fn week_with(day_schedule: DaySchedule) -> WeekSchedule {
    WeekSchedule::from([(Weekday::Mon, day_schedule)])
}

fn message(result: Result<(), BookingError>) -> String {
    match result {
        Err(BookingError::Validation(message)) => message,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_accepts_a_well_formed_event() {
    let week = week_with(day("09:00", "17:00"));
    assert!(validate_event_fields("Consultation", ct("01:00"), &week).is_ok());
}

#[test]
fn test_rejects_empty_event_name() {
    let week = week_with(day("09:00", "17:00"));
    let result = validate_event_fields("  ", ct("01:00"), &week);
    assert_eq!(message(result), "eventName cannot be empty");
}

#[test]
fn test_rejects_zero_slot_duration() {
    let week = week_with(day("09:00", "17:00"));
    let result = validate_event_fields("Consultation", ct("00:00"), &week);
    assert_eq!(message(result), "slotDuration must be greater than zero");
}

#[test]
fn test_rejects_inverted_open_hours() {
    let week = week_with(day("17:00", "09:00"));
    let result = validate_event_fields("Consultation", ct("01:00"), &week);
    assert!(message(result).contains("startTime must be before endTime"));
}

#[test]
fn test_rejects_window_too_small_for_one_slot() {
    let week = week_with(day("09:00", "09:45"));
    let result = validate_event_fields("Consultation", ct("01:00"), &week);
    assert!(message(result).contains("no whole slot"));
}

#[test]
fn test_rejects_unpaired_break() {
    let mut schedule = day("09:00", "17:00");
    schedule.break_start = Some(ct("12:00"));
    let result = validate_event_fields("Consultation", ct("01:00"), &week_with(schedule));
    assert!(message(result).contains("breakEnd is required"));
}

#[test]
fn test_rejects_inverted_break() {
    let mut schedule = day("09:00", "17:00");
    schedule.break_start = Some(ct("13:00"));
    schedule.break_end = Some(ct("12:00"));
    let result = validate_event_fields("Consultation", ct("01:00"), &week_with(schedule));
    assert!(message(result).contains("breakStart must be before breakEnd"));
}

#[test]
fn test_rejects_break_outside_open_hours() {
    let mut schedule = day("09:00", "17:00");
    schedule.break_start = Some(ct("16:30"));
    schedule.break_end = Some(ct("17:30"));
    let result = validate_event_fields("Consultation", ct("01:00"), &week_with(schedule));
    assert!(message(result).contains("break must lie within"));
}

#[test]
fn test_break_need_not_align_to_slots() {
    let mut schedule = day("09:00", "17:00");
    schedule.break_start = Some(ct("12:15"));
    schedule.break_end = Some(ct("12:45"));
    assert!(validate_event_fields("Consultation", ct("01:00"), &week_with(schedule)).is_ok());
}

fn appointment_request(phone: &str, slot: &str) -> AppointmentRequest {
    AppointmentRequest {
        event_id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        appointment_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid"),
        person_name: "Dana Mills".to_string(),
        person_phone: phone.to_string(),
        time_slot: slot.parse().expect("valid slot"),
    }
}

#[test]
fn test_accepts_a_well_formed_appointment() {
    assert!(validate_appointment_request(&appointment_request("5550123456", "09:00-10:00")).is_ok());
}

#[rstest]
#[case("555012345")] // too short
#[case("55501234567")] // too long
#[case("555O123456")] // letter
fn test_rejects_bad_phone(#[case] phone: &str) {
    let result = validate_appointment_request(&appointment_request(phone, "09:00-10:00"));
    assert_eq!(message(result), "personPhone is not in correct format");
}

#[test]
fn test_rejects_inverted_time_slot() {
    let result = validate_appointment_request(&appointment_request("5550123456", "10:00-09:00"));
    assert_eq!(message(result), "timeSlot is not in correct format");
}

#[test]
fn test_rejects_blank_person_name() {
    let mut request = appointment_request("5550123456", "09:00-10:00");
    request.person_name = " ".to_string();
    assert_eq!(
        message(validate_appointment_request(&request)),
        "personName cannot be empty"
    );
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        first_name: "Dana".to_string(),
        last_name: "Mills".to_string(),
        email: "dana@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
        confirm_password: "hunter2hunter2".to_string(),
        login_type: LoginType::Owner,
    }
}

#[test]
fn test_accepts_a_well_formed_signup() {
    assert!(validate_signup(&signup_request()).is_ok());
}

#[test]
fn test_rejects_short_names() {
    let mut request = signup_request();
    request.first_name = "Al".to_string();
    assert!(message(validate_signup(&request)).contains("firstName"));
}

#[test]
fn test_rejects_password_out_of_bounds() {
    let mut request = signup_request();
    request.password = "short".to_string();
    request.confirm_password = "short".to_string();
    assert!(message(validate_signup(&request)).contains("minimum length of 8"));

    let mut request = signup_request();
    request.password = "x".repeat(21);
    request.confirm_password = request.password.clone();
    assert!(message(validate_signup(&request)).contains("maximum length of 20"));
}

#[test]
fn test_rejects_mismatched_confirmation() {
    let mut request = signup_request();
    request.confirm_password = "different-pass".to_string();
    assert_eq!(
        message(validate_signup(&request)),
        "confirmPassword does not match with password"
    );
}

#[rstest]
#[case("dana@example.com", true)]
#[case("dana@sub.example.com", true)]
#[case("dana", false)]
#[case("@example.com", false)]
#[case("dana@example", false)]
#[case("dana@.com", false)]
fn test_email_shapes(#[case] email: &str, #[case] valid: bool) {
    assert_eq!(validate_email(email).is_ok(), valid);
}
