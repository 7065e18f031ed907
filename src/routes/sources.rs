//! Source registry endpoints: list, add, delete, activate.
//!
//! These are the mutation entry points behind the dashboard's source
//! switcher and the profile page's source management list. All state changes
//! go through the controller; refusals come back as status codes, never as
//! crashes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, warn};

use crate::{Config, Controller, SourceInfo, StateError};

// ---

pub fn router() -> Router<(Controller, Config)> {
    // ---
    Router::new()
        .route("/sources", get(list).post(add))
        .route("/sources/{id}", delete(remove))
        .route("/sources/{id}/activate", post(activate))
}

async fn list(State((controller, _)): State<(Controller, Config)>) -> impl IntoResponse {
    // ---
    Json(controller.snapshot().await.sources)
}

async fn add(
    State((controller, _)): State<(Controller, Config)>,
    Json(source): Json<SourceInfo>,
) -> impl IntoResponse {
    // ---
    info!("POST /sources - registering '{}'", source.id);
    controller.add_source(source).await;
    StatusCode::CREATED
}

async fn remove(
    State((controller, _)): State<(Controller, Config)>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // ---
    info!("DELETE /sources/{}", id);

    match controller.delete_source(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err @ StateError::LastSource) => {
            warn!("Refusing to delete '{}': last remaining source", id);
            (StatusCode::CONFLICT, Json(err.to_string())).into_response()
        }
        Err(err @ StateError::SourceNotFound { .. }) => {
            warn!("Delete for unknown source '{}'", id);
            (StatusCode::NOT_FOUND, Json(err.to_string())).into_response()
        }
    }
}

/// Make the source active and return the reading generated for it, so the
/// switcher can update the dashboard without a second request.
async fn activate(
    State((controller, _)): State<(Controller, Config)>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // ---
    info!("POST /sources/{}/activate", id);

    match controller.select_source(&id).await {
        Ok(reading) => (StatusCode::OK, Json(reading)).into_response(),
        Err(err) => {
            warn!("Activate for unknown source '{}'", id);
            (StatusCode::NOT_FOUND, Json(err.to_string())).into_response()
        }
    }
}
