use thiserror::Error;

use crate::models::event::Weekday;

/// Top-level error type for engine operations.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error(transparent)]
    Rejected(#[from] AdmissionRejection),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] eyre::Report),

    #[error("Authentication error: {0}")]
    Authentication(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// A schedule/date-range inconsistency found when an event is created or
/// replaced. Expected business outcomes, surfaced verbatim and never
/// retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageError {
    #[error("End date is before start date")]
    InvalidRange,

    #[error("Days can't be selected for the given week range: no schedule for {0}")]
    MissingWeekday(Weekday),
}

/// Why a booking request was turned away by admission control.
///
/// The checks run in a fixed order and stop at the first failure, so the
/// variant also tells the caller which check tripped first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionRejection {
    #[error("Event not exists")]
    EventNotFound,

    #[error("Appointment date is not in event date range")]
    DateOutOfRange,

    #[error("Appointment time is not in event time")]
    TimeOutsideSchedule,

    #[error("Duration of appointment time is not equal to event time slot duration")]
    DurationMismatch,

    #[error("Owner of event and owner of appointment are different")]
    OwnerMismatch,
}

/// Failure to parse an `HH:MM` clock-time string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid clock time: {0}")]
pub struct TimeParseError(pub String);

/// Failure to parse an `HH:MM-HH:MM` time-slot string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time slot: {0}")]
pub struct SlotParseError(pub String);
