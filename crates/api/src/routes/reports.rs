use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report download routes mounted at `/reports`.
///
/// ```text
/// GET /csv/{kind}               -> csv_inventory_report (inventory|depreciation|status|type)
/// GET /csv/assets/{id}          -> csv_asset_report
/// GET /csv/certificates/{id}    -> csv_certificate
/// GET /xml/{kind}               -> xml_inventory_report (audit|depreciation|movements)
/// GET /xml/certificates/{id}    -> xml_certificate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/csv/{kind}", get(reports::csv_inventory_report))
        .route("/csv/assets/{id}", get(reports::csv_asset_report))
        .route("/csv/certificates/{id}", get(reports::csv_certificate))
        .route("/xml/{kind}", get(reports::xml_inventory_report))
        .route("/xml/certificates/{id}", get(reports::xml_certificate))
}
