use axum::Router;

use crate::{Config, Controller};

mod alerts;
mod dashboard;
mod health;
mod profile;
mod sources;

// ---

pub fn router(controller: Controller, config: Config) -> Router {
    // ---
    Router::new()
        .merge(dashboard::router())
        .merge(sources::router())
        .merge(alerts::router())
        .merge(profile::router())
        .merge(health::router())
        .with_state((controller, config))
}
