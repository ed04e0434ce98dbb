//! # Slotbook API
//!
//! The API crate provides the web server for the Slotbook booking service.
//! It defines RESTful endpoints for accounts, events, availability lookups
//! and appointments.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like auth helpers and error handling
//! - **Validation**: Semantic request checks ahead of the core engine
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database
//! interactions; every scheduling decision is delegated to
//! `slotbook-core`.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement endpoint logic
pub mod handlers;
/// OTP delivery collaborator
pub mod mailer;
/// Middleware for auth helpers and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Semantic request validation
pub mod validation;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use slotbook_db::store::PgStore;

use crate::mailer::{LogMailer, OtpMailer};

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// The core engine's store ports, backed by the same pool
    pub store: PgStore,
    /// Collaborator that delivers password-reset codes
    pub mailer: Arc<dyn OtpMailer>,
    /// How long a password-reset code stays valid
    pub otp_ttl: chrono::Duration,
}

/// Starts the API server with the provided configuration and database
/// connection: sets up logging, builds the router, applies CORS and
/// timeout layers, and serves.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store: PgStore::new(db_pool.clone()),
        db_pool,
        mailer: Arc::new(LogMailer),
        otp_ttl: chrono::Duration::minutes(config.otp_ttl_minutes),
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Account endpoints
        .merge(routes::user::routes())
        // Event management endpoints
        .merge(routes::event::routes())
        // Availability lookup endpoints
        .merge(routes::availability::routes())
        // Appointment booking endpoints
        .merge(routes::appointment::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request logging and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
