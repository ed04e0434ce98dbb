use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbUser;

pub async fn create_user(
    pool: &Pool<Postgres>,
    first_name: &str,
    last_name: &str,
    email: &str,
    password_hash: &str,
    login_type: &str,
) -> Result<DbUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, email={}", id, email);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, first_name, last_name, email, password_hash, login_type, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, first_name, last_name, email, password_hash, login_type, created_at
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(password_hash)
    .bind(login_type)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, first_name, last_name, email, password_hash, login_type, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Updates profile fields for the account, conditional on the row
/// existing. Returns `Ok(None)` when no account matches the email.
pub async fn update_user(
    pool: &Pool<Postgres>,
    email: &str,
    first_name: &str,
    last_name: &str,
    password_hash: &str,
    login_type: &str,
) -> Result<Option<DbUser>> {
    tracing::debug!("Updating user: email={}", email);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET first_name = $2, last_name = $3, password_hash = $4, login_type = $5
        WHERE email = $1
        RETURNING id, first_name, last_name, email, password_hash, login_type, created_at
        "#,
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(password_hash)
    .bind(login_type)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn update_password(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
) -> Result<Option<DbUser>> {
    tracing::debug!("Updating password: email={}", email);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET password_hash = $2
        WHERE email = $1
        RETURNING id, first_name, last_name, email, password_hash, login_type, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn delete_user(pool: &Pool<Postgres>, email: &str) -> Result<()> {
    tracing::debug!("Deleting user: email={}", email);

    sqlx::query(
        r#"
        DELETE FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .execute(pool)
    .await?;

    Ok(())
}
