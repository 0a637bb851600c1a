//! Handlers for the asset inventory: CRUD, search, statistics, and the
//! per-asset depreciation and alert views.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use inventario_core::alert::generate_alerts;
use inventario_core::asset::{Asset, AssetUpdate, NewAsset};
use inventario_core::depreciation::compute_depreciation;
use inventario_core::error::CoreError;
use inventario_core::inventory::{
    filter_assets, inventory_statistics, search_assets as search, unique_locations, unique_years,
    ReportFilter,
};
use inventario_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::{AsOfParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Values available to the report filter form.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub locations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Collection endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/assets
///
/// List assets, narrowed by any [`ReportFilter`] criteria in the query.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> AppResult<impl IntoResponse> {
    let assets = filter_assets(&state.store.list().await, &filter);

    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/assets
///
/// Register a new asset. The store assigns the id.
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<NewAsset>,
) -> AppResult<impl IntoResponse> {
    let asset = state.store.create(input).await?;

    tracing::info!(
        asset_id = asset.id,
        name = %asset.name,
        asset_type = %asset.asset_type,
        "Asset created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/assets/search?q=
///
/// Case-insensitive search over name, responsible and location.
pub async fn search_assets(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let assets = search(&state.store.list().await, &params.q);

    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/statistics
pub async fn asset_statistics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = inventory_statistics(&state.store.list().await);

    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/assets/filters
///
/// Distinct acquisition years (newest first) and locations (sorted).
pub async fn filter_options(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = state.store.list().await;
    let options = FilterOptions {
        years: unique_years(&assets),
        locations: unique_locations(&assets),
    };

    Ok(Json(DataResponse { data: options }))
}

// ---------------------------------------------------------------------------
// Single-asset endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = find_asset(&state, asset_id).await?;

    Ok(Json(DataResponse { data: asset }))
}

/// PUT /api/v1/assets/{id}
///
/// Partially update an asset. The merged result is validated as a whole.
pub async fn update_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    Json(input): Json<AssetUpdate>,
) -> AppResult<impl IntoResponse> {
    let asset = state
        .store
        .update(asset_id, input)
        .await?
        .ok_or(not_found(asset_id))?;

    tracing::info!(asset_id, status = asset.status.label(), "Asset updated");

    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete(asset_id).await {
        return Err(not_found(asset_id));
    }

    tracing::info!(asset_id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/assets/{id}/depreciation?as_of=
pub async fn asset_depreciation(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    Query(params): Query<AsOfParams>,
) -> AppResult<impl IntoResponse> {
    let asset = find_asset(&state, asset_id).await?;
    let today = state.reference_date(params.as_of);
    let depreciation = compute_depreciation(&asset, &state.rates, today);

    Ok(Json(DataResponse { data: depreciation }))
}

/// GET /api/v1/assets/{id}/alerts?as_of=
pub async fn asset_alerts(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    Query(params): Query<AsOfParams>,
) -> AppResult<impl IntoResponse> {
    let asset = find_asset(&state, asset_id).await?;
    let today = state.reference_date(params.as_of);
    let alerts = generate_alerts(&asset, &state.rates, today);

    Ok(Json(DataResponse { data: alerts }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up an asset or fail with 404.
pub(crate) async fn find_asset(state: &AppState, asset_id: DbId) -> AppResult<Asset> {
    state.store.get(asset_id).await.ok_or(not_found(asset_id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Asset", id })
}
