//! Alert endpoints: list and dismiss.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use tracing::info;
use uuid::Uuid;

use crate::{Config, Controller};

// ---

pub fn router() -> Router<(Controller, Config)> {
    // ---
    Router::new()
        .route("/alerts", get(list))
        .route("/alerts/{id}", delete(dismiss))
}

async fn list(State((controller, _)): State<(Controller, Config)>) -> impl IntoResponse {
    // ---
    Json(controller.snapshot().await.alerts)
}

/// Dismissal deletes the alert. 204 either way: dismissing an id that is
/// already gone is not an error, the client may be acting on a stale list.
async fn dismiss(
    State((controller, _)): State<(Controller, Config)>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    // ---
    info!("DELETE /alerts/{}", id);
    controller.dismiss_alert(&id).await;
    StatusCode::NO_CONTENT
}
