//! Inventory-wide aggregation used by audit and summary reports.
//!
//! Aggregation never fails: loose records that cannot be turned into an
//! [`Asset`] are skipped and reported as data-quality alerts.

use chrono::NaiveDate;
use serde::Serialize;

use crate::alert::{Alert, AlertKind, AlertPriority};
use crate::asset::{Asset, AssetRecord, AssetStatus};
use crate::depreciation::compute_depreciation;
use crate::error::CoreError;
use crate::rates::DepreciationRateTable;

/// Inventory totals as of a reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_count: usize,
    /// `Σ price * quantity`.
    pub total_value: f64,
    pub assigned_count: usize,
    pub available_count: usize,
    /// `Σ accumulated depreciation`.
    pub estimated_total_depreciation: f64,
    /// One entry per skipped record. Always empty for typed input.
    pub data_quality_alerts: Vec<Alert>,
}

/// Aggregate already-validated assets.
pub fn aggregate_summary(
    assets: &[Asset],
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Summary {
    let mut summary = Summary {
        total_count: assets.len(),
        total_value: 0.0,
        assigned_count: 0,
        available_count: 0,
        estimated_total_depreciation: 0.0,
        data_quality_alerts: Vec::new(),
    };

    for asset in assets {
        summary.total_value += asset.total_value();
        match asset.status {
            AssetStatus::Assigned => summary.assigned_count += 1,
            AssetStatus::Available => summary.available_count += 1,
            AssetStatus::Maintenance | AssetStatus::Retired => {}
        }
        summary.estimated_total_depreciation +=
            compute_depreciation(asset, rates, today).accumulated;
    }

    summary
}

/// Aggregate loose records, skipping and reporting the malformed ones.
///
/// `total_count` counts only the records that were aggregated.
pub fn aggregate_records(
    records: &[AssetRecord],
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Summary {
    let mut assets = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match Asset::try_from(record.clone()) {
            Ok(asset) => assets.push(asset),
            Err(err) => {
                tracing::warn!(index, asset_id = ?record.id, error = %err, "Skipping malformed asset record");
                skipped.push(skipped_record_alert(index, record, &err));
            }
        }
    }

    let mut summary = aggregate_summary(&assets, rates, today);
    summary.data_quality_alerts = skipped;
    summary
}

fn skipped_record_alert(index: usize, record: &AssetRecord, err: &CoreError) -> Alert {
    let message = match err {
        CoreError::MalformedRecord { field } => {
            format!("Registro {index} omitido: falta el campo '{field}'")
        }
        other => format!("Registro {index} omitido: {other}"),
    };
    Alert {
        kind: AlertKind::DataQuality,
        priority: AlertPriority::Low,
        message,
        asset_id: record.id,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
