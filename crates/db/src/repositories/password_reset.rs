use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbPasswordReset;

/// Stores a pending reset code for the account, replacing any previous
/// one. Codes are keyed by account identity and carry an explicit expiry;
/// nothing about a reset lives in process memory.
pub async fn upsert_reset_code(
    pool: &Pool<Postgres>,
    email: &str,
    otp: &str,
    expires_at: DateTime<Utc>,
) -> Result<()> {
    tracing::debug!("Storing reset code: email={}, expires_at={}", email, expires_at);

    sqlx::query(
        r#"
        INSERT INTO password_resets (email, otp, expires_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO UPDATE SET otp = $2, expires_at = $3
        "#,
    )
    .bind(email)
    .bind(otp)
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_reset_code(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<DbPasswordReset>> {
    let row = sqlx::query_as::<_, DbPasswordReset>(
        r#"
        SELECT email, otp, expires_at
        FROM password_resets
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_reset_code(pool: &Pool<Postgres>, email: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM password_resets
        WHERE email = $1
        "#,
    )
    .bind(email)
    .execute(pool)
    .await?;

    Ok(())
}
