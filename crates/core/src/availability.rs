use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::event::{Event, Weekday};
use crate::slots::generate_slots;
use crate::store::{AppointmentStore, EventStore};
use crate::time::TimeSlot;

/// Computes the free slots for an event on a calendar date.
///
/// A date outside the event's active range, or one whose weekday has no
/// schedule entry, yields an empty list. Otherwise candidates come from the
/// weekly schedule and the slots already booked for `(event_id, date)` are
/// subtracted, preserving generation order. Read-only; calling it twice
/// with no intervening booking yields identical output.
pub async fn compute_free_slots(
    events: &dyn EventStore,
    appointments: &dyn AppointmentStore,
    event_id: Uuid,
    date: NaiveDate,
) -> BookingResult<Vec<TimeSlot>> {
    let event = events
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Event {event_id} not found")))?;

    free_slots_for(&event, appointments, date).await
}

/// Same as [`compute_free_slots`] for an event already in hand.
///
/// A store failure while fetching booked slots propagates as
/// `StoreUnavailable`; it is never read as "no bookings".
pub async fn free_slots_for(
    event: &Event,
    appointments: &dyn AppointmentStore,
    date: NaiveDate,
) -> BookingResult<Vec<TimeSlot>> {
    if !event.is_active_on(date) {
        return Ok(Vec::new());
    }
    let Some(day) = event.day_schedule(Weekday::from_date(date)) else {
        return Ok(Vec::new());
    };

    let booked: HashSet<String> = appointments
        .booked_slots(event.id, date)
        .await?
        .into_iter()
        .collect();

    Ok(generate_slots(day, event.slot_duration)
        .filter(|slot| !booked.contains(&slot.to_string()))
        .collect())
}

/// The event's bookable dates within a `YYYY-MM` month: active days whose
/// weekday has a schedule entry.
pub fn bookable_dates(event: &Event, month: &str) -> Vec<NaiveDate> {
    event
        .start_date
        .iter_days()
        .take_while(|d| *d <= event.end_date)
        .filter(|d| d.format("%Y-%m").to_string() == month)
        .filter(|d| event.day_schedule(Weekday::from_date(*d)).is_some())
        .collect()
}
