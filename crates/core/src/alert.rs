//! Derived asset alerts: high depreciation and unassigned high-value assets.
//!
//! Alerts are recomputed on demand and never persisted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::asset::{Asset, AssetStatus};
use crate::depreciation::compute_depreciation;
use crate::rates::DepreciationRateTable;
use crate::types::DbId;

/// Depreciation percentage above which a high-priority alert is raised.
pub const HIGH_DEPRECIATION_PERCENT: f64 = 80.0;
/// Depreciation percentage above which a medium-priority alert is raised.
pub const MEDIUM_DEPRECIATION_PERCENT: f64 = 50.0;
/// Unit price above which an available asset is flagged as idle high value.
pub const HIGH_VALUE_PRICE: f64 = 1000.0;

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    #[serde(rename = "Depreciación")]
    Depreciation,
    #[serde(rename = "Valor")]
    Value,
    /// A stored record could not be evaluated.
    #[serde(rename = "Calidad de datos")]
    DataQuality,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Depreciation => "Depreciación",
            Self::Value => "Valor",
            Self::DataQuality => "Calidad de datos",
        }
    }
}

/// Alert urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertPriority {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Baja")]
    Low,
}

impl AlertPriority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

/// A single derived warning about an asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub message: String,
    /// The asset concerned, when one could be identified.
    pub asset_id: Option<DbId>,
}

/// Evaluate the alert rules for one asset as of `today`.
///
/// A depreciation alert, if any, always precedes a value alert.
pub fn generate_alerts(
    asset: &Asset,
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let depreciation = compute_depreciation(asset, rates, today);

    let priority = if depreciation.percentage > HIGH_DEPRECIATION_PERCENT {
        Some(AlertPriority::High)
    } else if depreciation.percentage > MEDIUM_DEPRECIATION_PERCENT {
        Some(AlertPriority::Medium)
    } else {
        None
    };
    if let Some(priority) = priority {
        alerts.push(Alert {
            kind: AlertKind::Depreciation,
            priority,
            message: format!(
                "Activo ha alcanzado {:.0}% de depreciación",
                depreciation.percentage
            ),
            asset_id: Some(asset.id),
        });
    }

    if asset.price > HIGH_VALUE_PRICE && asset.status == AssetStatus::Available {
        alerts.push(Alert {
            kind: AlertKind::Value,
            priority: AlertPriority::Medium,
            message: "Activo de alto valor sin asignar".to_string(),
            asset_id: Some(asset.id),
        });
    }

    alerts
}

/// Alerts for every asset, grouped in input order.
pub fn generate_all_alerts(
    assets: &[Asset],
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Vec<Alert> {
    assets
        .iter()
        .flat_map(|a| generate_alerts(a, rates, today))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
