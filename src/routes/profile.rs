//! User profile endpoints backing the settings page.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use tracing::info;

use crate::{Config, Controller, Profile};

// ---

pub fn router() -> Router<(Controller, Config)> {
    // ---
    Router::new().route("/profile", get(show).put(update))
}

async fn show(State((controller, _)): State<(Controller, Config)>) -> impl IntoResponse {
    // ---
    Json(controller.snapshot().await.profile)
}

async fn update(
    State((controller, _)): State<(Controller, Config)>,
    Json(profile): Json<Profile>,
) -> impl IntoResponse {
    // ---
    info!("PUT /profile");
    controller.update_profile(profile).await;
    StatusCode::NO_CONTENT
}
