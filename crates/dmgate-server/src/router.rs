//! Axum router wiring.
//!
//! Exposes the `/dm/*` debug adapter plus operational endpoints.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/dm/*path", any(transport::http::dm_entry))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
