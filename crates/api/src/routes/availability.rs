use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/events/:id/slots/:date",
        get(handlers::availability::get_free_slots),
    )
}
