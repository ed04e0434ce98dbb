use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use slotbook_core::models::appointment::AppointmentRequest;

use crate::models::DbAppointment;

/// Inserts a booking. Returns `Ok(None)` when the slot is already taken:
/// the unique constraint on `(event_id, appointment_date, time_slot)` is
/// the arbiter for concurrent bookings, so a violation is a business
/// outcome here, not an infrastructure error.
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment_id: Uuid,
    request: &AppointmentRequest,
) -> Result<Option<DbAppointment>> {
    tracing::debug!(
        "Creating appointment: id={}, event_id={}, date={}, slot={}",
        appointment_id,
        request.event_id,
        request.appointment_date,
        request.time_slot
    );

    let result = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (appointment_id, appointment_date, event_id, owner_id,
                                  user_id, person_name, person_phone, time_slot, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING appointment_id, appointment_date, event_id, owner_id,
                  user_id, person_name, person_phone, time_slot, created_at, updated_at
        "#,
    )
    .bind(appointment_id)
    .bind(request.appointment_date)
    .bind(request.event_id)
    .bind(request.owner_id)
    .bind(request.user_id)
    .bind(&request.person_name)
    .bind(&request.person_phone)
    .bind(request.time_slot.to_string())
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => Ok(Some(row)),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::debug!("Slot already booked: {}", request.time_slot);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Reschedule, conditional on the appointment existing. Returns `Ok(None)`
/// when no row matches the key.
pub async fn update_appointment(
    pool: &Pool<Postgres>,
    appointment_id: Uuid,
    request: &AppointmentRequest,
) -> Result<Option<DbAppointment>> {
    tracing::debug!(
        "Updating appointment: id={}, date={}",
        appointment_id,
        request.appointment_date
    );

    let result = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET person_name = $3, person_phone = $4, time_slot = $5, updated_at = $6
        WHERE appointment_date = $1 AND appointment_id = $2
        RETURNING appointment_id, appointment_date, event_id, owner_id,
                  user_id, person_name, person_phone, time_slot, created_at, updated_at
        "#,
    )
    .bind(request.appointment_date)
    .bind(appointment_id)
    .bind(&request.person_name)
    .bind(&request.person_phone)
    .bind(request.time_slot.to_string())
    .bind(Utc::now())
    .fetch_optional(pool)
    .await;

    match result {
        Ok(row) => Ok(row),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::debug!("Slot already booked: {}", request.time_slot);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_appointment(
    pool: &Pool<Postgres>,
    appointment_date: NaiveDate,
    appointment_id: Uuid,
) -> Result<()> {
    tracing::debug!(
        "Deleting appointment: id={}, date={}",
        appointment_id,
        appointment_date
    );

    sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE appointment_date = $1 AND appointment_id = $2
        "#,
    )
    .bind(appointment_date)
    .bind(appointment_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// The slot strings already booked for an event on a date.
pub async fn get_booked_slots(
    pool: &Pool<Postgres>,
    event_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<String>> {
    let slots = sqlx::query_scalar::<_, String>(
        r#"
        SELECT time_slot
        FROM appointments
        WHERE appointment_date = $1 AND event_id = $2
        "#,
    )
    .bind(date)
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// A user's appointments on a date, booked by them or booked with them as
/// the owner.
pub async fn get_appointments_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT appointment_id, appointment_date, event_id, owner_id,
               user_id, person_name, person_phone, time_slot, created_at, updated_at
        FROM appointments
        WHERE appointment_date = $1 AND (user_id = $2 OR owner_id = $2)
        "#,
    )
    .bind(date)
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Whether any appointment still references the event. Events with live
/// bookings cannot be deleted.
pub async fn event_has_appointments(pool: &Pool<Postgres>, event_id: Uuid) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM appointments WHERE event_id = $1
        )
        "#,
    )
    .bind(event_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
