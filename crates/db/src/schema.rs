use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            login_type VARCHAR(16) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create events table; the key mirrors the event id plus its owner
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id UUID NOT NULL,
            owner_id UUID NOT NULL,
            event_name VARCHAR(255) NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            slot_duration TIME NOT NULL,
            select_week JSONB NOT NULL,
            covered_months TEXT[] NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NULL,
            PRIMARY KEY (id, owner_id),
            CONSTRAINT valid_date_range CHECK (end_date >= start_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table; the unique constraint arbitrates
    // concurrent bookings for the same slot
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            appointment_id UUID NOT NULL,
            appointment_date DATE NOT NULL,
            event_id UUID NOT NULL,
            owner_id UUID NOT NULL,
            user_id UUID NOT NULL,
            person_name VARCHAR(255) NOT NULL,
            person_phone VARCHAR(32) NOT NULL,
            time_slot VARCHAR(16) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NULL,
            PRIMARY KEY (appointment_date, appointment_id),
            CONSTRAINT one_booking_per_slot UNIQUE (event_id, appointment_date, time_slot)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create password_resets table; one pending code per account
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS password_resets (
            email VARCHAR(255) PRIMARY KEY,
            otp VARCHAR(8) NOT NULL,
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; one statement per query, prepared statements take a
    // single command
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_events_owner_id ON events(owner_id)",
        "CREATE INDEX IF NOT EXISTS idx_events_end_date ON events(end_date)",
        "CREATE INDEX IF NOT EXISTS idx_events_covered_months ON events USING GIN (covered_months)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_event_id ON appointments(event_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_user_id ON appointments(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_owner_id ON appointments(owner_id)",
    ];
    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
