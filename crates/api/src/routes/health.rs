use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    asset_count: usize,
    host: String,
    port: u16,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        asset_count: state.store.count().await,
        host: state.config.host.clone(),
        port: state.config.port,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
