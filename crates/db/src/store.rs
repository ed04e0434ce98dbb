use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::PgPool;
use uuid::Uuid;

use slotbook_core::models::event::Event;
use slotbook_core::store::{AppointmentStore, EventStore};

use crate::repositories;

/// The engine's store ports backed by the PostgreSQL pool. Cloning shares
/// the underlying pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgStore {
    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>> {
        let row = repositories::event::get_event_by_id(&self.pool, event_id).await?;
        Ok(row.map(Event::from))
    }

    async fn find_by_id_and_owner(
        &self,
        event_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Event>> {
        let row = repositories::event::get_event(&self.pool, event_id, owner_id).await?;
        Ok(row.map(Event::from))
    }
}

#[async_trait]
impl AppointmentStore for PgStore {
    async fn booked_slots(&self, event_id: Uuid, date: NaiveDate) -> Result<Vec<String>> {
        repositories::appointment::get_booked_slots(&self.pool, event_id, date).await
    }
}
