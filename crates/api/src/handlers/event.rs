use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    availability::bookable_dates,
    coverage::validate_coverage,
    errors::BookingError,
    models::event::{CreateEventRequest, DeleteEventRequest, Event, UpdateEventRequest},
};

use crate::{middleware::error_handling::AppError, validation, ApiState};

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<Event>, AppError> {
    validation::validate_event_fields(
        &payload.event_name,
        payload.slot_duration,
        &payload.select_week,
    )?;

    // Coverage is checked before anything is written; the derived month set
    // is persisted alongside the event
    let covered_months =
        validate_coverage(payload.start_date, payload.end_date, &payload.select_week)
            .map_err(BookingError::from)?;

    let event = Event {
        id: Uuid::new_v4(),
        owner_id: payload.owner_id,
        event_name: payload.event_name,
        start_date: payload.start_date,
        end_date: payload.end_date,
        slot_duration: payload.slot_duration,
        select_week: payload.select_week,
        covered_months: covered_months.into_iter().collect(),
        created_at: Utc::now(),
    };

    let row = slotbook_db::repositories::event::create_event(&state.db_pool, &event).await?;

    Ok(Json(Event::from(row)))
}

#[axum::debug_handler]
pub async fn update_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<Event>, AppError> {
    validation::validate_event_fields(
        &payload.event_name,
        payload.slot_duration,
        &payload.select_week,
    )?;

    // Full replace: coverage and the month set are recomputed from scratch
    let covered_months =
        validate_coverage(payload.start_date, payload.end_date, &payload.select_week)
            .map_err(BookingError::from)?;

    let event = Event {
        id,
        owner_id: payload.owner_id,
        event_name: payload.event_name,
        start_date: payload.start_date,
        end_date: payload.end_date,
        slot_duration: payload.slot_duration,
        select_week: payload.select_week,
        covered_months: covered_months.into_iter().collect(),
        created_at: Utc::now(),
    };

    let row = slotbook_db::repositories::event::update_event(&state.db_pool, &event)
        .await?
        .ok_or_else(|| {
            BookingError::PreconditionFailed(format!("Event with ID {id} does not exist"))
        })?;

    Ok(Json(Event::from(row)))
}

#[axum::debug_handler]
pub async fn delete_event(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<DeleteEventRequest>,
) -> Result<Json<Value>, AppError> {
    // Events with live bookings cannot be deleted
    let has_appointments =
        slotbook_db::repositories::appointment::event_has_appointments(&state.db_pool, payload.id)
            .await?;
    if has_appointments {
        return Err(AppError(BookingError::Validation(
            "Event is associated with appointments".to_string(),
        )));
    }

    slotbook_db::repositories::event::delete_event(&state.db_pool, payload.id, payload.owner_id)
        .await?;

    Ok(Json(json!({})))
}

#[axum::debug_handler]
pub async fn get_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    let row = slotbook_db::repositories::event::get_event_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Event with ID {id} not found")))?;

    Ok(Json(Event::from(row)))
}

#[axum::debug_handler]
pub async fn get_events_by_owner(
    State(state): State<Arc<ApiState>>,
    Path(owner_id): Path<Uuid>,
) -> Result<Json<Vec<Event>>, AppError> {
    let rows =
        slotbook_db::repositories::event::get_events_by_owner(&state.db_pool, owner_id).await?;

    Ok(Json(rows.into_iter().map(Event::from).collect()))
}

#[axum::debug_handler]
pub async fn get_active_events(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<Event>>, AppError> {
    let rows =
        slotbook_db::repositories::event::get_events_active_on(&state.db_pool, date).await?;

    Ok(Json(rows.into_iter().map(Event::from).collect()))
}

/// The event's bookable dates inside one `YYYY-MM` month, for rendering a
/// booking calendar.
#[axum::debug_handler]
pub async fn get_event_dates(
    State(state): State<Arc<ApiState>>,
    Path((id, month)): Path<(Uuid, String)>,
) -> Result<Json<Vec<NaiveDate>>, AppError> {
    let row = slotbook_db::repositories::event::get_event_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Event with ID {id} not found")))?;

    let event = Event::from(row);
    Ok(Json(bookable_dates(&event, &month)))
}
