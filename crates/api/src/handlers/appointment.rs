use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    admission::admit_appointment,
    errors::BookingError,
    models::appointment::{Appointment, AppointmentRequest, DeleteAppointmentRequest},
};

use crate::{middleware::error_handling::AppError, validation, ApiState};

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    validation::validate_appointment_request(&payload)?;

    // Admission validates against the current schedule; the insert below is
    // what actually claims the slot
    admit_appointment(&state.store, &payload).await?;

    let appointment_id = Uuid::new_v4();
    let row = slotbook_db::repositories::appointment::create_appointment(
        &state.db_pool,
        appointment_id,
        &payload,
    )
    .await?
    .ok_or_else(|| {
        BookingError::PreconditionFailed("Time slot is already booked".to_string())
    })?;

    Ok(Json(Appointment::try_from(row)?))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<ApiState>>,
    Path(appointment_id): Path<Uuid>,
    Json(payload): Json<AppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    validation::validate_appointment_request(&payload)?;

    // A reschedule re-runs the same admission checks as a fresh booking
    admit_appointment(&state.store, &payload).await?;

    let row = slotbook_db::repositories::appointment::update_appointment(
        &state.db_pool,
        appointment_id,
        &payload,
    )
    .await?
    .ok_or_else(|| {
        BookingError::PreconditionFailed(format!(
            "Appointment with ID {appointment_id} does not exist, or the slot is already booked"
        ))
    })?;

    Ok(Json(Appointment::try_from(row)?))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<DeleteAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    slotbook_db::repositories::appointment::delete_appointment(
        &state.db_pool,
        payload.appointment_date,
        payload.appointment_id,
    )
    .await?;

    Ok(Json(json!({})))
}

/// A user's appointments on a date, whether they booked them or own the
/// event they were booked against.
#[axum::debug_handler]
pub async fn get_appointments_by_user(
    State(state): State<Arc<ApiState>>,
    Path((user_id, date)): Path<(Uuid, NaiveDate)>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let rows = slotbook_db::repositories::appointment::get_appointments_for_user(
        &state.db_pool,
        user_id,
        date,
    )
    .await?;

    let appointments = rows
        .into_iter()
        .map(Appointment::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(appointments))
}
