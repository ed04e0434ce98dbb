use axum::{
    routing::{delete, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/users", post(handlers::user::signup))
        .route("/api/users", put(handlers::user::update_user))
        .route("/api/users", delete(handlers::user::delete_user))
        .route("/api/users/login", post(handlers::user::login))
        .route(
            "/api/users/forgot-password",
            post(handlers::user::forgot_password),
        )
        .route(
            "/api/users/reset-password",
            post(handlers::user::reset_password),
        )
}
