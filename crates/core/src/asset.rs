//! Asset records, categories, statuses and input validation.
//!
//! [`Asset`] is the validated shape every engine function consumes.
//! [`AssetRecord`] is the loose shape read from storage or a request body,
//! where any field may be missing; converting it is how malformed rows are
//! detected during aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum quantity accepted on create/update.
pub const MAX_ASSET_QUANTITY: i64 = 9999;

/// Maximum unit price accepted on create/update. Keeps
/// `price * MAX_ASSET_QUANTITY` well inside the finite `f64` range.
pub const MAX_ASSET_PRICE: f64 = 1_000_000_000.0;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Asset categories recognised by the statutory depreciation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    #[serde(rename = "Edificaciones")]
    Buildings,
    #[serde(rename = "Instalaciones, maquinaria, equipos y muebles")]
    FacilitiesMachineryFurniture,
    #[serde(rename = "Vehículos y equipo caminero")]
    VehiclesRoadEquipment,
    #[serde(rename = "Equipos de cómputo y software")]
    ComputersSoftware,
    #[serde(rename = "Barcazas y aeronaves")]
    BargesAircraft,
    #[serde(rename = "Aviones de fumigación")]
    CropDustingAircraft,
    #[serde(rename = "Otros aviones")]
    OtherAircraft,
    #[serde(rename = "Equipo ferroviario")]
    RailwayEquipment,
    #[serde(rename = "Vehículos de carga")]
    CargoVehicles,
    #[serde(rename = "Vehículos eléctricos ligeros")]
    LightElectricVehicles,
    #[serde(rename = "Equipos de Laboratorio")]
    LaboratoryEquipment,
}

impl AssetCategory {
    /// Every category, in table order.
    pub const ALL: [AssetCategory; 11] = [
        Self::Buildings,
        Self::FacilitiesMachineryFurniture,
        Self::VehiclesRoadEquipment,
        Self::ComputersSoftware,
        Self::BargesAircraft,
        Self::CropDustingAircraft,
        Self::OtherAircraft,
        Self::RailwayEquipment,
        Self::CargoVehicles,
        Self::LightElectricVehicles,
        Self::LaboratoryEquipment,
    ];

    /// The label stored on asset records.
    pub fn label(self) -> &'static str {
        match self {
            Self::Buildings => "Edificaciones",
            Self::FacilitiesMachineryFurniture => "Instalaciones, maquinaria, equipos y muebles",
            Self::VehiclesRoadEquipment => "Vehículos y equipo caminero",
            Self::ComputersSoftware => "Equipos de cómputo y software",
            Self::BargesAircraft => "Barcazas y aeronaves",
            Self::CropDustingAircraft => "Aviones de fumigación",
            Self::OtherAircraft => "Otros aviones",
            Self::RailwayEquipment => "Equipo ferroviario",
            Self::CargoVehicles => "Vehículos de carga",
            Self::LightElectricVehicles => "Vehículos eléctricos ligeros",
            Self::LaboratoryEquipment => "Equipos de Laboratorio",
        }
    }

    /// Resolve a stored label. Returns `None` for labels outside the table.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Assignment status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    #[serde(rename = "Disponible")]
    Available,
    #[serde(rename = "Asignado", alias = "No disponible")]
    Assigned,
    #[serde(rename = "En Mantenimiento", alias = "En mantenimiento")]
    Maintenance,
    #[serde(rename = "Dado de Baja", alias = "Dado de baja")]
    Retired,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        Self::Available,
        Self::Assigned,
        Self::Maintenance,
        Self::Retired,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Assigned => "Asignado",
            Self::Maintenance => "En Mantenimiento",
            Self::Retired => "Dado de Baja",
        }
    }

    /// Parse a label, accepting the legacy spellings older records carry.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Disponible" => Some(Self::Available),
            "Asignado" | "No disponible" => Some(Self::Assigned),
            "En Mantenimiento" | "En mantenimiento" => Some(Self::Maintenance),
            "Dado de Baja" | "Dado de baja" => Some(Self::Retired),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// An inventoried asset.
///
/// `asset_type` is kept as the raw label so records carrying a category
/// outside [`AssetCategory`] can still be evaluated at the default rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Unit price.
    pub price: f64,
    pub quantity: i64,
    pub status: AssetStatus,
    pub responsible: String,
    pub location: String,
    /// Acquisition date.
    pub date: NaiveDate,
}

impl Asset {
    /// Build an asset from validated input and a store-assigned id.
    pub fn from_new(id: DbId, input: NewAsset) -> Self {
        Self {
            id,
            name: input.name,
            asset_type: input.asset_type,
            price: input.price,
            quantity: input.quantity,
            status: input.status,
            responsible: input.responsible,
            location: input.location,
            date: input.date,
        }
    }

    /// `price * quantity`, unclamped.
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// ---------------------------------------------------------------------------
// Loose record
// ---------------------------------------------------------------------------

/// An asset row as read from storage, before any field is known to exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: Option<DbId>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
    pub responsible: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
}

impl From<&Asset> for AssetRecord {
    fn from(asset: &Asset) -> Self {
        Self {
            id: Some(asset.id),
            name: Some(asset.name.clone()),
            asset_type: Some(asset.asset_type.clone()),
            price: Some(asset.price),
            quantity: Some(asset.quantity),
            status: Some(asset.status.label().to_string()),
            responsible: Some(asset.responsible.clone()),
            location: Some(asset.location.clone()),
            date: Some(asset.date.format("%Y-%m-%d").to_string()),
        }
    }
}

impl TryFrom<AssetRecord> for Asset {
    type Error = CoreError;

    /// Structural conversion only: every field must be present and parse.
    /// Value ranges (price, quantity) are not checked here.
    fn try_from(record: AssetRecord) -> Result<Self, Self::Error> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T, CoreError> {
            value.ok_or(CoreError::MalformedRecord { field })
        }

        let status = required(record.status, "status")?;
        let status =
            AssetStatus::from_label(&status).ok_or(CoreError::MalformedRecord { field: "status" })?;
        let date = required(record.date, "date")?;
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| CoreError::MalformedRecord { field: "date" })?;

        Ok(Self {
            id: required(record.id, "id")?,
            name: required(record.name, "name")?,
            asset_type: required(record.asset_type, "type")?,
            price: required(record.price, "price")?,
            quantity: required(record.quantity, "quantity")?,
            status,
            responsible: required(record.responsible, "responsible")?,
            location: required(record.location, "location")?,
            date,
        })
    }
}

// ---------------------------------------------------------------------------
// Create / update inputs
// ---------------------------------------------------------------------------

/// Input for registering a new asset. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewAsset {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[validate(range(
        exclusive_min = 0.0,
        max = 1_000_000_000.0,
        message = "price must be greater than 0 and at most 1000000000"
    ))]
    pub price: f64,
    #[validate(range(min = 1, max = 9999, message = "quantity must be between 1 and 9999"))]
    pub quantity: i64,
    pub status: AssetStatus,
    pub responsible: String,
    pub location: String,
    pub date: NaiveDate,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub status: Option<AssetStatus>,
    pub responsible: Option<String>,
    pub location: Option<String>,
    pub date: Option<NaiveDate>,
}

impl AssetUpdate {
    /// Overlay this update on `current`, producing input ready for validation.
    pub fn merge_into(self, current: &Asset) -> NewAsset {
        NewAsset {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            asset_type: self.asset_type.unwrap_or_else(|| current.asset_type.clone()),
            price: self.price.unwrap_or(current.price),
            quantity: self.quantity.unwrap_or(current.quantity),
            status: self.status.unwrap_or(current.status),
            responsible: self
                .responsible
                .unwrap_or_else(|| current.responsible.clone()),
            location: self.location.unwrap_or_else(|| current.location.clone()),
            date: self.date.unwrap_or(current.date),
        }
    }
}

/// Validate create/update input.
///
/// Field-level rules come from the `validator` derive; blank text fields and
/// categories outside the depreciation table are checked here.
pub fn validate_asset(input: &NewAsset) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    for (field, value) in [
        ("name", &input.name),
        ("responsible", &input.responsible),
        ("location", &input.location),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{field} must not be empty")));
        }
    }

    if AssetCategory::from_label(&input.asset_type).is_none() {
        return Err(CoreError::Validation(format!(
            "type '{}' is not a recognised asset category",
            input.asset_type
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
