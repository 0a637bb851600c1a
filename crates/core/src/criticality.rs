//! Price-based criticality and depreciation-based physical condition used by
//! audit reports.

use serde::Serialize;

use crate::depreciation::Depreciation;

/// Unit price above which an asset is high criticality.
pub const HIGH_CRITICALITY_PRICE: f64 = 500.0;
/// Unit price above which an asset is medium criticality.
pub const MEDIUM_CRITICALITY_PRICE: f64 = 100.0;

/// Audit priority derived from unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Criticality {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Baja")]
    Low,
}

impl Criticality {
    /// Classify by unit price: `> 500` high, `> 100` medium, else low.
    pub fn from_price(price: f64) -> Self {
        if price > HIGH_CRITICALITY_PRICE {
            Self::High
        } else if price > MEDIUM_CRITICALITY_PRICE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

/// Physical condition estimated from how far an asset has depreciated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhysicalCondition {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Bueno")]
    Good,
    #[serde(rename = "Regular")]
    Fair,
}

impl PhysicalCondition {
    /// `> 80%` fair, `> 50%` good, else excellent.
    pub fn from_depreciation(depreciation: &Depreciation) -> Self {
        if depreciation.percentage > 80.0 {
            Self::Fair
        } else if depreciation.percentage > 50.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excelente",
            Self::Good => "Bueno",
            Self::Fair => "Regular",
        }
    }
}
