//! # Availability Handlers
//!
//! Free-slot lookups for a single event and date. The computation itself
//! lives in `slotbook_core::availability`; this handler only resolves the
//! path parameters, lets the engine subtract booked slots from the weekly
//! template, and renders the result as `HH:MM-HH:MM` strings.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::availability::compute_free_slots;

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists the still-bookable slots for an event on a date.
///
/// A date outside the event's active range, or on a weekday the event does
/// not open, yields an empty list rather than an error. A store failure
/// while reading existing bookings fails the request; it is never treated
/// as "no bookings".
#[axum::debug_handler]
pub async fn get_free_slots(
    State(state): State<Arc<ApiState>>,
    Path((event_id, date)): Path<(Uuid, NaiveDate)>,
) -> Result<Json<Vec<String>>, AppError> {
    let slots = compute_free_slots(&state.store, &state.store, event_id, date).await?;

    Ok(Json(slots.iter().map(ToString::to_string).collect()))
}
