use axum::routing::get;
use axum::Router;

use crate::handlers::depreciation;
use crate::state::AppState;

/// Inventory-wide engine routes, merged at the `/api/v1` root.
///
/// ```text
/// GET  /depreciation   -> list_depreciation (?as_of=)
/// GET  /alerts         -> list_alerts (?as_of=)
/// GET  /summary        -> get_summary (?as_of=)
/// POST /summary        -> summarize_records (?as_of=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/depreciation", get(depreciation::list_depreciation))
        .route("/alerts", get(depreciation::list_alerts))
        .route(
            "/summary",
            get(depreciation::get_summary).post(depreciation::summarize_records),
        )
}
