use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/events", post(handlers::event::create_event))
        .route("/api/events", delete(handlers::event::delete_event))
        .route("/api/events/:id", get(handlers::event::get_event))
        .route("/api/events/:id", put(handlers::event::update_event))
        .route(
            "/api/events/:id/dates/:month",
            get(handlers::event::get_event_dates),
        )
        .route(
            "/api/events/owner/:owner_id",
            get(handlers::event::get_events_by_owner),
        )
        .route(
            "/api/events/active/:date",
            get(handlers::event::get_active_events),
        )
}
