//! # Slotbook API
//!
//! Web server for the Slotbook reservation service. It exposes the
//! reservation read/write surface and the derived week-availability grid.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint and URL structure per resource
//! - **Handlers**: request processing, delegating slot logic to `slotbook-core`
//! - **Middleware**: error-to-response mapping
//! - **Config**: environment configuration
//!
//! The API uses Axum as the web framework and SQLx for database access.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the reservation and availability surface
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state handed to every request handler.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
}

/// Starts the API server with the provided configuration and database pool.
///
/// Initializes logging, assembles the router, applies the CORS, trace and
/// timeout layers, and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { db_pool });

    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Reservation read/write endpoints
        .merge(routes::reservations::routes())
        // Derived week-availability endpoint
        .merge(routes::availability::routes())
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<axum::http::HeaderValue> = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<_, _>>()
            .map_err(|e| eyre::eyre!("Invalid CORS origin: {e}"))?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Request logging and a per-request timeout
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout,
            ))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
