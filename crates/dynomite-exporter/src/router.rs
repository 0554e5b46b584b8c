//! Axum router wiring.
//!
//! - `/`                 : landing page
//! - `/healthz`          : liveness
//! - `{telemetry_path}`  : Prometheus text format

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let telemetry_path = state.cfg().web.telemetry_path.clone();
    Router::new()
        .route("/", get(ops::landing))
        .route("/healthz", get(ops::healthz))
        .route(&telemetry_path, get(ops::metrics))
        .with_state(state)
}
