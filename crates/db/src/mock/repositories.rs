use chrono::{DateTime, NaiveDate, Utc};
use mockall::mock;
use uuid::Uuid;

use slotbook_core::models::appointment::AppointmentRequest;
use slotbook_core::models::event::Event;

use crate::models::{DbAppointment, DbEvent, DbPasswordReset, DbUser};

// Mock repositories for testing
mock! {
    pub EventRepo {
        pub async fn create_event(&self, event: Event) -> eyre::Result<DbEvent>;

        pub async fn update_event(&self, event: Event) -> eyre::Result<Option<DbEvent>>;

        pub async fn get_event_by_id(&self, id: Uuid) -> eyre::Result<Option<DbEvent>>;

        pub async fn get_event(
            &self,
            id: Uuid,
            owner_id: Uuid,
        ) -> eyre::Result<Option<DbEvent>>;

        pub async fn get_events_by_owner(&self, owner_id: Uuid) -> eyre::Result<Vec<DbEvent>>;

        pub async fn get_events_active_on(&self, date: NaiveDate) -> eyre::Result<Vec<DbEvent>>;

        pub async fn delete_event(&self, id: Uuid, owner_id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            appointment_id: Uuid,
            request: AppointmentRequest,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn update_appointment(
            &self,
            appointment_id: Uuid,
            request: AppointmentRequest,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn delete_appointment(
            &self,
            appointment_date: NaiveDate,
            appointment_id: Uuid,
        ) -> eyre::Result<()>;

        pub async fn get_booked_slots(
            &self,
            event_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<String>>;

        pub async fn get_appointments_for_user(
            &self,
            user_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn event_has_appointments(&self, event_id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            first_name: &'static str,
            last_name: &'static str,
            email: &'static str,
            password_hash: &'static str,
            login_type: &'static str,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn update_password(
            &self,
            email: &'static str,
            password_hash: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn delete_user(&self, email: &'static str) -> eyre::Result<()>;
    }
}

mock! {
    pub PasswordResetRepo {
        pub async fn upsert_reset_code(
            &self,
            email: &'static str,
            otp: &'static str,
            expires_at: DateTime<Utc>,
        ) -> eyre::Result<()>;

        pub async fn get_reset_code(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbPasswordReset>>;

        pub async fn delete_reset_code(&self, email: &'static str) -> eyre::Result<()>;
    }
}
