//! REST API over the event store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db::EventStore;
use crate::events::EventRecord;

/// Build the API router. Handlers share the store; CORS is open because
/// the API is read-only.
pub fn router(store: EventStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(all_events))
        .route("/campaigns/:id/events", get(campaign_events))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CampaignEventsResponse {
    campaign_id: String,
    count: usize,
    events: Vec<EventRecord>,
}

#[derive(Serialize)]
struct AllEventsResponse {
    count: usize,
    events: Vec<EventRecord>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn internal_error(e: impl std::fmt::Display) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /campaigns/:id/events`
///
/// The full indexed history of one campaign: its creation, every donation,
/// and the claim, in ledger order.
async fn campaign_events(
    State(store): State<EventStore>,
    Path(campaign_id): Path<String>,
) -> impl IntoResponse {
    match store.campaign_history(&campaign_id).await {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(CampaignEventsResponse {
                    campaign_id,
                    count,
                    events,
                }),
            )
                .into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// `GET /events`
///
/// All indexed events across all campaigns.
async fn all_events(State(store): State<EventStore>) -> impl IntoResponse {
    match store.all_events().await {
        Ok(events) => {
            let count = events.len();
            (StatusCode::OK, Json(AllEventsResponse { count, events })).into_response()
        }
        Err(e) => internal_error(e),
    }
}
