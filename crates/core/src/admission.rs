use crate::errors::{AdmissionRejection, BookingError, BookingResult};
use crate::models::appointment::AppointmentRequest;
use crate::models::event::{Event, Weekday};
use crate::store::EventStore;
use crate::time::{duration_equals, overlaps, ClockTime};

/// Validates a booking request against the event's schedule.
///
/// Checks run in a fixed order and stop at the first failure; callers rely
/// on which rejection surfaces first. A date whose weekday has no schedule
/// entry reports `EventNotFound`, the same reason as a failed event lookup.
pub fn admit(request: &AppointmentRequest, event: &Event) -> Result<(), AdmissionRejection> {
    if !event.is_active_on(request.appointment_date) {
        return Err(AdmissionRejection::DateOutOfRange);
    }

    let weekday = Weekday::from_date(request.appointment_date);
    let Some(day) = event.day_schedule(weekday) else {
        return Err(AdmissionRejection::EventNotFound);
    };

    let slot = request.time_slot;
    if !overlaps(day.start_time, day.end_time, slot.start, slot.end) {
        return Err(AdmissionRejection::TimeOutsideSchedule);
    }

    if !duration_equals(slot.start, slot.end, ClockTime::MIDNIGHT, event.slot_duration) {
        return Err(AdmissionRejection::DurationMismatch);
    }

    if event.owner_id != request.owner_id {
        return Err(AdmissionRejection::OwnerMismatch);
    }

    Ok(())
}

/// Admission control with the event lookup folded in: fetches the event by
/// `(event_id, owner_id)`, runs the ordered checks, and returns the event
/// so the caller can proceed to the write.
///
/// Admission does not reserve the slot; the store's uniqueness constraint
/// on `(event_id, appointment_date, time_slot)` arbitrates concurrent
/// bookings at write time.
pub async fn admit_appointment(
    events: &dyn EventStore,
    request: &AppointmentRequest,
) -> BookingResult<Event> {
    let event = events
        .find_by_id_and_owner(request.event_id, request.owner_id)
        .await?
        .ok_or(BookingError::Rejected(AdmissionRejection::EventNotFound))?;

    admit(request, &event)?;
    Ok(event)
}
