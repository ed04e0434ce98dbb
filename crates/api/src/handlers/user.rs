use axum::{extract::State, Json};
use chrono::Utc;
use rand::Rng;
use serde_json::{json, Value};
use std::sync::Arc;

use slotbook_core::{
    errors::BookingError,
    models::user::{
        DeleteUserRequest, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest,
        SignupRequest, User, UserProfile,
    },
};

use crate::{
    middleware::{auth, error_handling::AppError},
    validation, ApiState,
};

#[axum::debug_handler]
pub async fn signup(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<UserProfile>, AppError> {
    validation::validate_signup(&payload)?;

    let existing =
        slotbook_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email).await?;
    if existing.is_some() {
        return Err(AppError(BookingError::PreconditionFailed(
            "User already exists".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password)?;
    let row = slotbook_db::repositories::user::create_user(
        &state.db_pool,
        &payload.first_name,
        &payload.last_name,
        &payload.email,
        &password_hash,
        payload.login_type.as_str(),
    )
    .await?;

    let user = User::try_from(row)?;
    Ok(Json(UserProfile {
        id: user.id,
        first_name: user.first_name,
        email: user.email,
        login_type: user.login_type,
    }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let row = slotbook_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email)
        .await?
        .ok_or_else(|| BookingError::NotFound("User not found".to_string()))?;

    let user = User::try_from(row)?;
    let is_valid = auth::verify_password(&payload.password, &user.password_hash)?;
    if !is_valid {
        return Err(AppError(BookingError::Authentication(
            "Invalid email or password".to_string(),
        )));
    }

    // The profile deliberately omits the credentials
    Ok(Json(UserProfile {
        id: user.id,
        first_name: user.first_name,
        email: user.email,
        login_type: user.login_type,
    }))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<Value>, AppError> {
    validation::validate_signup(&payload)?;

    let password_hash = auth::hash_password(&payload.password)?;
    slotbook_db::repositories::user::update_user(
        &state.db_pool,
        &payload.email,
        &payload.first_name,
        &payload.last_name,
        &password_hash,
        payload.login_type.as_str(),
    )
    .await?
    .ok_or_else(|| BookingError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({})))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<DeleteUserRequest>,
) -> Result<Json<Value>, AppError> {
    validation::validate_email(&payload.email)?;

    slotbook_db::repositories::user::delete_user(&state.db_pool, &payload.email).await?;

    Ok(Json(json!({})))
}

/// Starts a password reset: generates a one-time code, stores it keyed by
/// the account with an expiry, and hands it to the mailer collaborator.
/// Any previous pending code for the account is replaced.
#[axum::debug_handler]
pub async fn forgot_password(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    validation::validate_email(&payload.email)?;

    slotbook_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email)
        .await?
        .ok_or_else(|| BookingError::NotFound("User not found".to_string()))?;

    let otp = generate_otp();
    let expires_at = Utc::now() + state.otp_ttl;
    slotbook_db::repositories::password_reset::upsert_reset_code(
        &state.db_pool,
        &payload.email,
        &otp,
        expires_at,
    )
    .await?;

    state.mailer.send_otp(&payload.email, &otp).await?;

    Ok(Json(json!({ "message": "OTP sent" })))
}

/// Completes a password reset: the presented code must match the pending
/// one for the account and still be within its expiry. A used or expired
/// code is removed either way.
#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    validation::validate_reset_password(&payload)?;

    let pending = slotbook_db::repositories::password_reset::get_reset_code(
        &state.db_pool,
        &payload.email,
    )
    .await?
    .ok_or_else(|| BookingError::Authentication("Invalid OTP".to_string()))?;

    if pending.expires_at < Utc::now() {
        slotbook_db::repositories::password_reset::delete_reset_code(
            &state.db_pool,
            &payload.email,
        )
        .await?;
        return Err(AppError(BookingError::Authentication(
            "OTP has expired".to_string(),
        )));
    }

    if pending.otp != payload.otp {
        return Err(AppError(BookingError::Authentication(
            "Invalid OTP".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password)?;
    slotbook_db::repositories::user::update_password(
        &state.db_pool,
        &payload.email,
        &password_hash,
    )
    .await?
    .ok_or_else(|| BookingError::NotFound("User not found".to_string()))?;

    slotbook_db::repositories::password_reset::delete_reset_code(&state.db_pool, &payload.email)
        .await?;

    Ok(Json(json!({ "message": "Password updated" })))
}

fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}
