//! Route definitions for the asset inventory.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /                    -> list_assets (ReportFilter query)
/// POST   /                    -> create_asset
/// GET    /search?q=           -> search_assets
/// GET    /statistics          -> asset_statistics
/// GET    /filters             -> filter_options
/// GET    /{id}                -> get_asset
/// PUT    /{id}                -> update_asset
/// DELETE /{id}                -> delete_asset
/// GET    /{id}/depreciation   -> asset_depreciation (?as_of=)
/// GET    /{id}/alerts         -> asset_alerts (?as_of=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/search", get(assets::search_assets))
        .route("/statistics", get(assets::asset_statistics))
        .route("/filters", get(assets::filter_options))
        .route(
            "/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/{id}/depreciation", get(assets::asset_depreciation))
        .route("/{id}/alerts", get(assets::asset_alerts))
}
