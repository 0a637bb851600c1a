//! Annual straight-line depreciation rates per asset category.
//!
//! The table is built once and shared read-only; nothing mutates it after
//! construction.

use std::collections::HashMap;

use crate::asset::AssetCategory;
use crate::error::CoreError;

/// Rate applied to any label the table does not recognise.
pub const DEFAULT_DEPRECIATION_RATE: f64 = 0.10;

/// Statutory annual rates, in [`AssetCategory::ALL`] order.
const STATUTORY_RATES: [(AssetCategory, f64); 11] = [
    (AssetCategory::Buildings, 0.05),
    (AssetCategory::FacilitiesMachineryFurniture, 0.10),
    (AssetCategory::VehiclesRoadEquipment, 0.20),
    (AssetCategory::ComputersSoftware, 0.33),
    (AssetCategory::BargesAircraft, 0.05),
    (AssetCategory::CropDustingAircraft, 0.25),
    (AssetCategory::OtherAircraft, 0.10),
    (AssetCategory::RailwayEquipment, 0.06),
    (AssetCategory::CargoVehicles, 0.25),
    (AssetCategory::LightElectricVehicles, 0.25),
    (AssetCategory::LaboratoryEquipment, 0.10),
];

/// Mapping from asset category to annual depreciation rate.
#[derive(Debug, Clone)]
pub struct DepreciationRateTable {
    rates: HashMap<AssetCategory, f64>,
    default_rate: f64,
}

impl Default for DepreciationRateTable {
    /// The statutory table with a 10% fallback.
    fn default() -> Self {
        Self {
            rates: STATUTORY_RATES.into_iter().collect(),
            default_rate: DEFAULT_DEPRECIATION_RATE,
        }
    }
}

impl DepreciationRateTable {
    /// Replace the rate for one category. Intended for building custom tables
    /// before they are shared.
    pub fn with_rate(mut self, category: AssetCategory, rate: f64) -> Result<Self, CoreError> {
        validate_rate(rate, category.label())?;
        self.rates.insert(category, rate);
        Ok(self)
    }

    /// Replace the fallback rate for unrecognised labels.
    pub fn with_default_rate(mut self, rate: f64) -> Result<Self, CoreError> {
        validate_rate(rate, "default rate")?;
        self.default_rate = rate;
        Ok(self)
    }

    /// Rate for a stored category label, falling back to the default rate.
    pub fn rate_for(&self, asset_type: &str) -> f64 {
        AssetCategory::from_label(asset_type)
            .and_then(|category| self.rates.get(&category))
            .copied()
            .unwrap_or(self.default_rate)
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    /// All configured rates in table order.
    pub fn entries(&self) -> Vec<(AssetCategory, f64)> {
        AssetCategory::ALL
            .into_iter()
            .map(|c| (c, self.rates.get(&c).copied().unwrap_or(self.default_rate)))
            .collect()
    }
}

/// A rate must lie in `(0.0, 1.0]`.
pub fn validate_rate(rate: f64, name: &str) -> Result<(), CoreError> {
    if !(rate > 0.0 && rate <= 1.0) {
        return Err(CoreError::Validation(format!(
            "{name} rate must be in (0.0, 1.0], got {rate}"
        )));
    }
    Ok(())
}

/// Whole years of useful life implied by an annual rate (`round(1 / rate)`).
pub fn useful_life_years(rate: f64) -> u32 {
    if rate <= 0.0 {
        return 0;
    }
    (1.0 / rate).round() as u32
}
