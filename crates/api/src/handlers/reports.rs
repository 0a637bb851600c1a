//! Report downloads: CSV spreadsheets and XML audit documents.
//!
//! Inventory-wide reports accept the [`ReportFilter`] query plus `as_of`.
//! Every body is served as an attachment with a dated file name.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use chrono::Datelike;

use inventario_core::inventory::{filter_assets, ReportFilter};
use inventario_core::types::DbId;
use inventario_reports::{csv_report, xml_report};

use crate::error::{AppError, AppResult};
use crate::handlers::assets::find_asset;
use crate::query::AsOfParams;
use crate::state::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

// ---------------------------------------------------------------------------
// Report kinds
// ---------------------------------------------------------------------------

/// Inventory-wide CSV reports, addressed by path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvReportKind {
    Inventory,
    Depreciation,
    Status,
    Type,
}

impl FromStr for CsvReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventory" => Ok(Self::Inventory),
            "depreciation" => Ok(Self::Depreciation),
            "status" => Ok(Self::Status),
            "type" => Ok(Self::Type),
            other => Err(AppError::BadRequest(format!(
                "Unknown CSV report '{other}', expected one of: inventory, depreciation, status, type"
            ))),
        }
    }
}

impl CsvReportKind {
    fn file_stem(self) -> &'static str {
        match self {
            Self::Inventory => "reporte_inventario",
            Self::Depreciation => "reporte_depreciacion",
            Self::Status => "reporte_por_estado",
            Self::Type => "reporte_por_tipo",
        }
    }
}

/// Inventory-wide XML documents, addressed by path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlReportKind {
    Audit,
    Depreciation,
    Movements,
}

impl FromStr for XmlReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audit" => Ok(Self::Audit),
            "depreciation" => Ok(Self::Depreciation),
            "movements" => Ok(Self::Movements),
            other => Err(AppError::BadRequest(format!(
                "Unknown XML report '{other}', expected one of: audit, depreciation, movements"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// GET /api/v1/reports/csv/{kind}
pub async fn csv_inventory_report(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(filter): Query<ReportFilter>,
    Query(params): Query<AsOfParams>,
) -> AppResult<Response> {
    let kind: CsvReportKind = kind.parse()?;
    let today = state.reference_date(params.as_of);
    let assets = filter_assets(&state.store.list().await, &filter);

    let body = match kind {
        CsvReportKind::Inventory => csv_report::inventory_report(&assets, &state.rates, today)?,
        CsvReportKind::Depreciation => {
            csv_report::depreciation_report(&assets, &state.rates, today)?
        }
        CsvReportKind::Status => csv_report::status_report(&assets)?,
        CsvReportKind::Type => csv_report::type_report(&assets)?,
    };

    tracing::info!(report = ?kind, rows = assets.len(), "CSV report generated");

    attachment(
        CSV_CONTENT_TYPE,
        &format!("{}_{today}.csv", kind.file_stem()),
        body,
    )
}

/// GET /api/v1/reports/csv/assets/{id}
pub async fn csv_asset_report(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    Query(params): Query<AsOfParams>,
) -> AppResult<Response> {
    let asset = find_asset(&state, asset_id).await?;
    let today = state.reference_date(params.as_of);
    let body = csv_report::asset_report(&asset, &state.rates, today)?;

    attachment(
        CSV_CONTENT_TYPE,
        &format!("reporte_activo_{asset_id}_{today}.csv"),
        body,
    )
}

/// GET /api/v1/reports/csv/certificates/{id}
pub async fn csv_certificate(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    Query(params): Query<AsOfParams>,
) -> AppResult<Response> {
    let asset = find_asset(&state, asset_id).await?;
    let today = state.reference_date(params.as_of);
    let body = csv_report::assignment_certificate(&asset, today)?;

    tracing::info!(asset_id, responsible = %asset.responsible, "CSV certificate generated");

    attachment(
        CSV_CONTENT_TYPE,
        &format!("certificado_{asset_id}_{today}.csv"),
        body,
    )
}

// ---------------------------------------------------------------------------
// XML
// ---------------------------------------------------------------------------

/// GET /api/v1/reports/xml/{kind}
pub async fn xml_inventory_report(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(filter): Query<ReportFilter>,
    Query(params): Query<AsOfParams>,
) -> AppResult<Response> {
    let kind: XmlReportKind = kind.parse()?;
    let today = state.reference_date(params.as_of);
    let assets = filter_assets(&state.store.list().await, &filter);

    let (body, filename) = match kind {
        XmlReportKind::Audit => (
            xml_report::audit_report(&assets, &state.rates, today, &state.reports),
            format!("auditoria_{today}.xml"),
        ),
        XmlReportKind::Depreciation => (
            xml_report::depreciation_report(&assets, &state.rates, today),
            format!("depreciacion_{}.xml", today.year()),
        ),
        XmlReportKind::Movements => (
            xml_report::movement_history(&assets, state.clock.now()),
            format!("historial_{today}.xml"),
        ),
    };

    tracing::info!(report = ?kind, assets = assets.len(), "XML report generated");

    attachment(XML_CONTENT_TYPE, &filename, body)
}

/// GET /api/v1/reports/xml/certificates/{id}
pub async fn xml_certificate(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
) -> AppResult<Response> {
    let asset = find_asset(&state, asset_id).await?;
    let body = xml_report::assignment_certificate(&asset, state.clock.now(), &state.reports);

    tracing::info!(asset_id, responsible = %asset.responsible, "XML certificate generated");

    attachment(
        XML_CONTENT_TYPE,
        &format!("certificado_{asset_id}.xml"),
        body,
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn attachment(content_type: &'static str, filename: &str, body: String) -> AppResult<Response> {
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| AppError::InternalError(format!("Invalid download file name: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
