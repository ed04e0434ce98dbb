//! # Request Validation
//!
//! Semantic checks the engine is entitled to assume have already passed:
//! the core receives well-typed data, so malformed or internally
//! inconsistent requests are rejected here with a `Validation` error
//! before any store access happens.

use slotbook_core::errors::BookingError;
use slotbook_core::models::appointment::AppointmentRequest;
use slotbook_core::models::event::{DaySchedule, WeekSchedule, Weekday};
use slotbook_core::models::user::{ResetPasswordRequest, SignupRequest};
use slotbook_core::time::ClockTime;

fn fail(message: impl Into<String>) -> BookingError {
    BookingError::Validation(message.into())
}

/// Checks an event's schedule fields for internal consistency: open hours
/// ordered, breaks paired and contained, and room for at least one whole
/// slot per open day.
pub fn validate_event_fields(
    event_name: &str,
    slot_duration: ClockTime,
    select_week: &WeekSchedule,
) -> Result<(), BookingError> {
    if event_name.trim().is_empty() {
        return Err(fail("eventName cannot be empty"));
    }
    if slot_duration.since_midnight().num_minutes() <= 0 {
        return Err(fail("slotDuration must be greater than zero"));
    }

    for (weekday, day) in select_week {
        validate_day_schedule(*weekday, day, slot_duration)?;
    }

    Ok(())
}

fn validate_day_schedule(
    weekday: Weekday,
    day: &DaySchedule,
    slot_duration: ClockTime,
) -> Result<(), BookingError> {
    if day.start_time >= day.end_time {
        return Err(fail(format!("{weekday}: startTime must be before endTime")));
    }

    // the open window must fit at least one whole slot
    if day.start_time.since_midnight() + slot_duration.since_midnight()
        > day.end_time.since_midnight()
    {
        return Err(fail(format!(
            "{weekday}: no whole slot of the configured duration fits between startTime and endTime"
        )));
    }

    match (day.break_start, day.break_end) {
        (None, None) => {}
        (Some(_), None) => {
            return Err(fail(format!("{weekday}: breakEnd is required when breakStart is set")));
        }
        (None, Some(_)) => {
            return Err(fail(format!("{weekday}: breakStart is required when breakEnd is set")));
        }
        (Some(break_start), Some(break_end)) => {
            if break_start >= break_end {
                return Err(fail(format!("{weekday}: breakStart must be before breakEnd")));
            }
            if break_start < day.start_time || break_end > day.end_time {
                return Err(fail(format!(
                    "{weekday}: break must lie within startTime and endTime"
                )));
            }
        }
    }

    Ok(())
}

/// Checks a booking request's fields ahead of admission control.
pub fn validate_appointment_request(request: &AppointmentRequest) -> Result<(), BookingError> {
    if request.person_name.trim().is_empty() {
        return Err(fail("personName cannot be empty"));
    }
    if request.person_phone.len() != 10 || !request.person_phone.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(fail("personPhone is not in correct format"));
    }
    if request.time_slot.start >= request.time_slot.end {
        return Err(fail("timeSlot is not in correct format"));
    }
    Ok(())
}

/// Checks a signup request: name lengths, email shape, password policy.
pub fn validate_signup(request: &SignupRequest) -> Result<(), BookingError> {
    if request.first_name.trim().len() < 3 {
        return Err(fail("firstName should have a minimum length of 3"));
    }
    if request.last_name.trim().len() < 3 {
        return Err(fail("lastName should have a minimum length of 3"));
    }
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    if request.password != request.confirm_password {
        return Err(fail("confirmPassword does not match with password"));
    }
    Ok(())
}

/// Checks a reset-password request's new credentials.
pub fn validate_reset_password(request: &ResetPasswordRequest) -> Result<(), BookingError> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    if request.password != request.confirm_password {
        return Err(fail("confirmPassword does not match with password"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), BookingError> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });
    if !valid {
        return Err(fail("email should be a valid email"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), BookingError> {
    if password.len() < 8 {
        return Err(fail("password should have a minimum length of 8"));
    }
    if password.len() > 20 {
        return Err(fail("password should have a maximum length of 20"));
    }
    Ok(())
}
