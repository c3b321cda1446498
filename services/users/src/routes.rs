//! Users service routes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Create the router for the users service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/passengers/", get(list_passengers))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "users-service"
    }))
}

/// List every passenger, ordered by id
pub async fn list_passengers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let passengers = state.passengers.list().await.map_err(|e| {
        error!("Failed to list passengers: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::OK, Json(passengers)))
}
