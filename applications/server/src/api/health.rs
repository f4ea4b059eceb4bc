/// Health API route
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
}

/// GET /api/health
/// Liveness plus a storage reachability check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    // a readable user registry means the data directory is reachable
    let storage_ok = state.users.list().await.is_ok();

    Json(HealthResponse {
        status: if storage_ok { "ok" } else { "degraded" },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        storage: if storage_ok { "ok" } else { "unavailable" },
    })
}
