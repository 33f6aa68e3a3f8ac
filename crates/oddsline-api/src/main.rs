// Oddsline API server
// Decision: migrations run after connecting and before the listener
// binds, so the schema always exists once traffic is accepted

mod error;
mod events;
mod extract;
mod publish;
mod services;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use oddsline_contracts::{CreateEventRequest, Event, EventStatus, UpdateEventStatusRequest};
use oddsline_storage::Database;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ErrorBody;
use crate::publish::LogUpdatePublisher;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        events::list_events,
        events::get_event,
        events::create_event,
        events::update_event_status,
    ),
    components(
        schemas(
            Event,
            EventStatus,
            CreateEventRequest,
            UpdateEventStatusRequest,
            ErrorBody,
        )
    ),
    tags(
        (name = "events", description = "Betting event management endpoints")
    ),
    info(
        title = "Oddsline API",
        description = "CRUD API for betting events: deadlines, odds, and outcome status",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oddsline_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("oddsline-api starting...");

    // Initialize database and ensure the schema exists before serving
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");
    db.migrate()
        .await
        .context("Failed to run database migrations")?;

    let state = events::AppState::new(Arc::new(db), Arc::new(LogUpdatePublisher));
    let app = build_router(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Assemble the full router: event routes, health, Swagger UI, tracing
fn build_router(state: events::AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(events::routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
