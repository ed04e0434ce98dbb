use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use slotbook_core::models::event::Event;

use crate::models::DbEvent;

pub async fn create_event(pool: &Pool<Postgres>, event: &Event) -> Result<DbEvent> {
    tracing::debug!(
        "Creating event: id={}, owner_id={}, name={}",
        event.id,
        event.owner_id,
        event.event_name
    );

    let row = sqlx::query_as::<_, DbEvent>(
        r#"
        INSERT INTO events (id, owner_id, event_name, start_date, end_date,
                            slot_duration, select_week, covered_months, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, owner_id, event_name, start_date, end_date,
                  slot_duration, select_week, covered_months, created_at, updated_at
        "#,
    )
    .bind(event.id)
    .bind(event.owner_id)
    .bind(&event.event_name)
    .bind(event.start_date)
    .bind(event.end_date)
    .bind(event.slot_duration.time())
    .bind(Json(&event.select_week))
    .bind(&event.covered_months)
    .bind(event.created_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Full replace of the schedule fields, conditional on the row existing.
/// Returns `Ok(None)` when no event matches `(id, owner_id)`.
pub async fn update_event(pool: &Pool<Postgres>, event: &Event) -> Result<Option<DbEvent>> {
    tracing::debug!("Updating event: id={}, owner_id={}", event.id, event.owner_id);

    let row = sqlx::query_as::<_, DbEvent>(
        r#"
        UPDATE events
        SET event_name = $3, start_date = $4, end_date = $5,
            slot_duration = $6, select_week = $7, covered_months = $8, updated_at = $9
        WHERE id = $1 AND owner_id = $2
        RETURNING id, owner_id, event_name, start_date, end_date,
                  slot_duration, select_week, covered_months, created_at, updated_at
        "#,
    )
    .bind(event.id)
    .bind(event.owner_id)
    .bind(&event.event_name)
    .bind(event.start_date)
    .bind(event.end_date)
    .bind(event.slot_duration.time())
    .bind(Json(&event.select_week))
    .bind(&event.covered_months)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_event_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEvent>> {
    let row = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, owner_id, event_name, start_date, end_date,
               slot_duration, select_week, covered_months, created_at, updated_at
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_event(
    pool: &Pool<Postgres>,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<DbEvent>> {
    let row = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, owner_id, event_name, start_date, end_date,
               slot_duration, select_week, covered_months, created_at, updated_at
        FROM events
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_events_by_owner(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<Vec<DbEvent>> {
    let rows = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, owner_id, event_name, start_date, end_date,
               slot_duration, select_week, covered_months, created_at, updated_at
        FROM events
        WHERE owner_id = $1
        ORDER BY start_date ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Events whose active range has not ended before `date`.
pub async fn get_events_active_on(pool: &Pool<Postgres>, date: NaiveDate) -> Result<Vec<DbEvent>> {
    let rows = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, owner_id, event_name, start_date, end_date,
               slot_duration, select_week, covered_months, created_at, updated_at
        FROM events
        WHERE end_date >= $1
        ORDER BY start_date ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn delete_event(pool: &Pool<Postgres>, id: Uuid, owner_id: Uuid) -> Result<()> {
    tracing::debug!("Deleting event: id={}, owner_id={}", id, owner_id);

    sqlx::query(
        r#"
        DELETE FROM events
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(())
}
