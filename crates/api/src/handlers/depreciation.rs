//! Inventory-wide depreciation, alert and summary endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use inventario_core::alert::generate_all_alerts;
use inventario_core::asset::{Asset, AssetRecord};
use inventario_core::depreciation::{compute_depreciation, Depreciation};
use inventario_core::summary::{aggregate_records, aggregate_summary};

use crate::error::AppResult;
use crate::query::AsOfParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// An asset together with its depreciation snapshot.
#[derive(Debug, Serialize)]
pub struct AssetDepreciation {
    pub asset: Asset,
    pub depreciation: Depreciation,
}

/// GET /api/v1/depreciation?as_of=
pub async fn list_depreciation(
    State(state): State<AppState>,
    Query(params): Query<AsOfParams>,
) -> AppResult<impl IntoResponse> {
    let today = state.reference_date(params.as_of);
    let rows: Vec<AssetDepreciation> = state
        .store
        .list()
        .await
        .into_iter()
        .map(|asset| {
            let depreciation = compute_depreciation(&asset, &state.rates, today);
            AssetDepreciation {
                asset,
                depreciation,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/alerts?as_of=
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(params): Query<AsOfParams>,
) -> AppResult<impl IntoResponse> {
    let today = state.reference_date(params.as_of);
    let alerts = generate_all_alerts(&state.store.list().await, &state.rates, today);

    Ok(Json(DataResponse { data: alerts }))
}

/// GET /api/v1/summary?as_of=
pub async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<AsOfParams>,
) -> AppResult<impl IntoResponse> {
    let today = state.reference_date(params.as_of);
    let summary = aggregate_summary(&state.store.list().await, &state.rates, today);

    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/summary?as_of=
///
/// Summarise posted raw records. Records missing a required field are
/// skipped and listed under `data_quality_alerts`.
pub async fn summarize_records(
    State(state): State<AppState>,
    Query(params): Query<AsOfParams>,
    Json(records): Json<Vec<AssetRecord>>,
) -> AppResult<impl IntoResponse> {
    let today = state.reference_date(params.as_of);
    let summary = aggregate_records(&records, &state.rates, today);

    tracing::info!(
        received = records.len(),
        skipped = summary.data_quality_alerts.len(),
        "Summarised posted records",
    );

    Ok(Json(DataResponse { data: summary }))
}
