pub mod assets;
pub mod depreciation;
pub mod health;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                              list, create
/// /assets/search                       free-text search
/// /assets/statistics                   per-status counters
/// /assets/filters                      distinct years and locations
/// /assets/{id}                         get, update, delete
/// /assets/{id}/depreciation            depreciation snapshot
/// /assets/{id}/alerts                  alerts for one asset
///
/// /depreciation                        snapshot for every asset
/// /alerts                              alerts for every asset
/// /summary                             inventory summary (GET), raw records (POST)
///
/// /reports/csv/{kind}                  inventory|depreciation|status|type
/// /reports/csv/assets/{id}             single-asset sheet
/// /reports/csv/certificates/{id}       assignment certificate
/// /reports/xml/{kind}                  audit|depreciation|movements
/// /reports/xml/certificates/{id}       assignment certificate
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .merge(depreciation::router())
        .nest("/reports", reports::router())
}
