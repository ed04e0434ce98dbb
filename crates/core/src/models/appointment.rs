use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::TimeSlot;

/// A user's reservation of one slot on one concrete date.
///
/// References its event and user by id only; deleting neither cascades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: Uuid,
    pub appointment_date: NaiveDate,
    pub event_id: Uuid,
    pub owner_id: Uuid,
    pub user_id: Uuid,
    pub person_name: String,
    pub person_phone: String,
    pub time_slot: TimeSlot,
    pub created_at: DateTime<Utc>,
}

/// A booking request as it reaches admission control: already well-typed,
/// not yet checked against the event's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub event_id: Uuid,
    pub owner_id: Uuid,
    pub user_id: Uuid,
    pub appointment_date: NaiveDate,
    pub person_name: String,
    pub person_phone: String,
    pub time_slot: TimeSlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAppointmentRequest {
    pub appointment_id: Uuid,
    pub appointment_date: NaiveDate,
}
