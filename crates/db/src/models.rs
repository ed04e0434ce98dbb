use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use slotbook_core::models::appointment::Appointment;
use slotbook_core::models::event::{Event, WeekSchedule};
use slotbook_core::models::user::{LoginType, User};
use slotbook_core::time::{ClockTime, TimeSlot};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub login_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEvent {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub slot_duration: NaiveTime,
    pub select_week: Json<WeekSchedule>,
    pub covered_months: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub appointment_id: Uuid,
    pub appointment_date: NaiveDate,
    pub event_id: Uuid,
    pub owner_id: Uuid,
    pub user_id: Uuid,
    pub person_name: String,
    pub person_phone: String,
    pub time_slot: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPasswordReset {
    pub email: String,
    pub otp: String,
    pub expires_at: DateTime<Utc>,
}

impl From<DbEvent> for Event {
    fn from(row: DbEvent) -> Self {
        Event {
            id: row.id,
            owner_id: row.owner_id,
            event_name: row.event_name,
            start_date: row.start_date,
            end_date: row.end_date,
            slot_duration: ClockTime::from(row.slot_duration),
            select_week: row.select_week.0,
            covered_months: row.covered_months,
            created_at: row.created_at,
        }
    }
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = eyre::Report;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let time_slot: TimeSlot = row.time_slot.parse()?;
        Ok(Appointment {
            appointment_id: row.appointment_id,
            appointment_date: row.appointment_date,
            event_id: row.event_id,
            owner_id: row.owner_id,
            user_id: row.user_id,
            person_name: row.person_name,
            person_phone: row.person_phone,
            time_slot,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbUser> for User {
    type Error = eyre::Report;

    fn try_from(row: DbUser) -> Result<Self, Self::Error> {
        let login_type = match row.login_type.as_str() {
            "Owner" => LoginType::Owner,
            "User" => LoginType::User,
            other => return Err(eyre::eyre!("Unknown login type: {other}")),
        };
        Ok(User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password_hash: row.password_hash,
            login_type,
            created_at: row.created_at,
        })
    }
}
