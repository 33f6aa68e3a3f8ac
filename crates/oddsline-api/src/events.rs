// Event CRUD HTTP routes

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use oddsline_contracts::{CreateEventRequest, Event, UpdateEventStatusRequest};
use oddsline_storage::EventStore;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::extract::ValidatedJson;
use crate::publish::UpdatePublisher;
use crate::services::EventService;

const DEFAULT_LIMIT: i64 = 10;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>, publisher: Arc<dyn UpdatePublisher>) -> Self {
        Self {
            service: Arc::new(EventService::new(store, publisher)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{event_id}",
            get(get_event).patch(update_event_status),
        )
        .with_state(state)
}

/// Pagination parameters for event listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEventsQuery {
    /// Records to skip before the first returned one (default 0)
    #[param(example = 0)]
    pub skip: Option<i64>,
    /// Maximum number of records to return (default 10)
    #[param(example = 10)]
    pub limit: Option<i64>,
}

/// GET /events - List events with pagination
#[utoipa::path(
    get,
    path = "/events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "Page of events", body = [Event]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> ApiResult<Json<Vec<Event>>> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let events = state.service.list(skip, limit).await?;
    Ok(Json(events))
}

/// GET /events/{event_id} - Fetch a single event
#[utoipa::path(
    get,
    path = "/events/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> ApiResult<Json<Event>> {
    let event = state
        .service
        .get(event_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(event))
}

/// POST /events - Create a new event (status starts uncompleted)
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Event created", body = Event),
        (status = 422, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Json<Event>> {
    let event = state.service.create(req).await?;
    Ok(Json(event))
}

/// PATCH /events/{event_id} - Update an event's status
#[utoipa::path(
    patch,
    path = "/events/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event id")
    ),
    request_body = UpdateEventStatusRequest,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 404, description = "Event not found", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "events"
)]
pub async fn update_event_status(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateEventStatusRequest>,
) -> ApiResult<Json<Event>> {
    let event = state
        .service
        .update_status(event_id, req.status)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(event))
}
