//! CSV spreadsheets: inventory, depreciation, group totals, single-asset
//! sheets and assignment certificates.
//!
//! Every document starts with a UTF-8 byte-order mark so spreadsheet
//! applications pick the right encoding for accented labels.

use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};

use inventario_core::asset::Asset;
use inventario_core::depreciation::compute_depreciation;
use inventario_core::inventory::{group_by_status, group_by_type, GroupTotal};
use inventario_core::rates::DepreciationRateTable;

use crate::error::ReportError;
use crate::format::{iso_date, local_date, money, percent, rate_percent};

/// Leading byte-order mark of every CSV document.
pub const UTF8_BOM: &str = "\u{FEFF}";

const INVENTORY_HEADERS: [&str; 14] = [
    "ID",
    "Nombre",
    "Tipo de Activo",
    "Precio Unitario",
    "Cantidad",
    "Valor Total Original",
    "Estado",
    "Responsable",
    "Ubicación",
    "Fecha de Compra",
    "Años de Uso",
    "Tasa Depreciación %",
    "Valor Actual",
    "Depreciación Acumulada",
];

const DEPRECIATION_HEADERS: [&str; 13] = [
    "ID",
    "Nombre",
    "Tipo de Activo",
    "Precio Original",
    "Cantidad",
    "Valor Total Original",
    "Fecha de Compra",
    "Años de Uso",
    "Tasa Depreciación Anual",
    "Depreciación Anual",
    "Depreciación Acumulada",
    "Valor Actual",
    "Porcentaje Depreciado",
];

const FIELD_VALUE_HEADERS: [&str; 2] = ["Campo", "Valor"];

// ---------------------------------------------------------------------------
// Inventory-wide reports
// ---------------------------------------------------------------------------

/// One row per asset with its current book value.
pub fn inventory_report(
    assets: &[Asset],
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Result<String, ReportError> {
    let rows = assets.iter().map(|asset| {
        let d = compute_depreciation(asset, rates, today);
        vec![
            asset.id.to_string(),
            asset.name.clone(),
            asset.asset_type.clone(),
            money(asset.price),
            asset.quantity.to_string(),
            money(d.original_value),
            asset.status.label().to_string(),
            asset.responsible.clone(),
            asset.location.clone(),
            iso_date(asset.date),
            d.years_of_use.to_string(),
            rate_percent(d.rate),
            money(d.current_value),
            money(d.accumulated),
        ]
    });
    write_document(&INVENTORY_HEADERS, rows)
}

/// One row per asset with the full depreciation breakdown.
pub fn depreciation_report(
    assets: &[Asset],
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Result<String, ReportError> {
    let rows = assets.iter().map(|asset| {
        let d = compute_depreciation(asset, rates, today);
        vec![
            asset.id.to_string(),
            asset.name.clone(),
            asset.asset_type.clone(),
            money(asset.price),
            asset.quantity.to_string(),
            money(d.original_value),
            iso_date(asset.date),
            d.years_of_use.to_string(),
            rate_percent(d.rate),
            money(d.annual),
            money(d.accumulated),
            money(d.current_value),
            percent(d.percentage),
        ]
    });
    write_document(&DEPRECIATION_HEADERS, rows)
}

/// Count and value per status.
pub fn status_report(assets: &[Asset]) -> Result<String, ReportError> {
    group_report("Estado", &group_by_status(assets))
}

/// Count and value per category.
pub fn type_report(assets: &[Asset]) -> Result<String, ReportError> {
    group_report("Tipo", &group_by_type(assets))
}

fn group_report(label_header: &str, groups: &[GroupTotal]) -> Result<String, ReportError> {
    let headers = [label_header, "Cantidad de Activos", "Valor Total", "Porcentaje"];
    let rows = groups.iter().map(|g| {
        vec![
            g.label.clone(),
            g.count.to_string(),
            money(g.value),
            percent(g.share_percent),
        ]
    });
    write_document(&headers, rows)
}

// ---------------------------------------------------------------------------
// Single-asset documents
// ---------------------------------------------------------------------------

/// Field/value sheet for one asset.
pub fn asset_report(
    asset: &Asset,
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Result<String, ReportError> {
    let d = compute_depreciation(asset, rates, today);
    let unit_value = if asset.quantity > 0 {
        d.current_value / asset.quantity as f64
    } else {
        0.0
    };

    let fields = [
        ("ID", asset.id.to_string()),
        ("Nombre", asset.name.clone()),
        ("Tipo", asset.asset_type.clone()),
        ("Precio Unitario", money(asset.price)),
        ("Cantidad", asset.quantity.to_string()),
        ("Valor Total Original", money(d.original_value)),
        ("Estado", asset.status.label().to_string()),
        ("Responsable", asset.responsible.clone()),
        ("Ubicación", asset.location.clone()),
        ("Fecha de Compra", iso_date(asset.date)),
        ("Años de Uso", d.years_of_use.to_string()),
        ("Tasa de Depreciación Anual", rate_percent(d.rate)),
        ("Depreciación Anual", money(d.annual)),
        ("Depreciación Mensual", money(d.monthly)),
        ("Depreciación Acumulada", money(d.accumulated)),
        ("Valor Actual Unitario", money(unit_value)),
        ("Valor Total Actual", money(d.current_value)),
    ];
    write_fields(fields)
}

/// Field/value assignment certificate, certified on `today`.
pub fn assignment_certificate(asset: &Asset, today: NaiveDate) -> Result<String, ReportError> {
    let fields = [
        ("ID", asset.id.to_string()),
        ("Nombre del Activo", asset.name.clone()),
        ("Tipo", asset.asset_type.clone()),
        ("Precio Unitario", money(asset.price)),
        ("Cantidad", asset.quantity.to_string()),
        ("Valor Total", money(asset.total_value())),
        ("Estado", asset.status.label().to_string()),
        ("Responsable", asset.responsible.clone()),
        ("Ubicación", asset.location.clone()),
        ("Fecha de Asignación", iso_date(asset.date)),
        ("Fecha de Certificación", local_date(today)),
    ];
    write_fields(fields)
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

fn write_fields<const N: usize>(fields: [(&str, String); N]) -> Result<String, ReportError> {
    let rows = fields
        .into_iter()
        .map(|(field, value)| vec![field.to_string(), value]);
    write_document(&FIELD_VALUE_HEADERS, rows)
}

fn write_document<I>(headers: &[&str], rows: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    let mut count = 0usize;
    for row in rows {
        writer.write_record(&row)?;
        count += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Flush(e.to_string()))?;
    let body = String::from_utf8(bytes)?;

    tracing::debug!(rows = count, bytes = body.len(), "Rendered CSV document");
    Ok(format!("{UTF8_BOM}{body}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
