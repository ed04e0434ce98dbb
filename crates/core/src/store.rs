use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use crate::models::event::Event;

/// Read access to the event store, as seen by the engine.
///
/// Persistence is an external collaborator: the db crate implements these
/// ports for its connection pool, tests implement them in memory. Failures
/// are infrastructure errors, not business outcomes.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>>;

    async fn find_by_id_and_owner(
        &self,
        event_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Event>>;
}

/// Read access to booked appointment slots.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// The `HH:MM-HH:MM` strings already booked for an event on a date, in
    /// partition order (not guaranteed sorted).
    async fn booked_slots(&self, event_id: Uuid, date: NaiveDate) -> Result<Vec<String>>;
}
