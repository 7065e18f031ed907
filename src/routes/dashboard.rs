//! Dashboard snapshot and device metadata endpoints.
//!
//! `GET /dashboard` is the home screen's single round trip: active source,
//! latest reading, the source list for the switcher, the alert badge count
//! and the profile chip. `GET /device` serves the static hardware metadata
//! shown on the settings page.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::{seed, Config, Controller, DeviceConfig, Profile, SourceInfo, WaterData};

// ---

pub fn router() -> Router<(Controller, Config)> {
    // ---
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/device", get(device))
}

/// Everything the home screen renders, in one payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    // ---
    active_source: SourceInfo,
    reading: WaterData,
    sources: Vec<SourceInfo>,
    alert_count: usize,
    profile: Profile,
    /// How often `reading` changes server-side; the client polls on this cadence.
    refresh_interval_secs: u32,
}

async fn dashboard(State((controller, config)): State<(Controller, Config)>) -> impl IntoResponse {
    // ---
    debug!("GET /dashboard");
    let snapshot = controller.snapshot().await;

    let active_source = snapshot
        .sources
        .iter()
        .find(|s| s.id == snapshot.active_source_id)
        .cloned();

    match active_source {
        Some(active_source) => (
            StatusCode::OK,
            Json(DashboardResponse {
                active_source,
                reading: snapshot.current_reading,
                alert_count: snapshot.alerts.len(),
                sources: snapshot.sources,
                profile: snapshot.profile,
                refresh_interval_secs: config.refresh_interval_secs,
            }),
        )
            .into_response(),
        None => {
            // The controller keeps the active id pointing at a registered
            // source; reaching this means that invariant broke
            error!(
                "Active source '{}' missing from registry",
                snapshot.active_source_id
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json("Inconsistent session state")).into_response()
        }
    }
}

async fn device() -> Json<DeviceConfig> {
    // ---
    Json(seed::device_info())
}
