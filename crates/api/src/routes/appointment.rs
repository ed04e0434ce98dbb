use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            post(handlers::appointment::create_appointment),
        )
        .route(
            "/api/appointments",
            delete(handlers::appointment::delete_appointment),
        )
        .route(
            "/api/appointments/:id",
            put(handlers::appointment::update_appointment),
        )
        .route(
            "/api/appointments/user/:user_id/date/:date",
            get(handlers::appointment::get_appointments_by_user),
        )
}
