use std::sync::Arc;

use chrono::NaiveDate;
use inventario_core::clock::Clock;
use inventario_core::rates::DepreciationRateTable;
use inventario_reports::ReportConfig;

use crate::config::ServerConfig;
use crate::store::AssetStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory inventory.
    pub store: Arc<AssetStore>,
    /// Annual depreciation rates, fixed for the process lifetime.
    pub rates: Arc<DepreciationRateTable>,
    /// Source of "today" for depreciation and report dates.
    pub clock: Arc<dyn Clock>,
    /// Institution details printed on reports.
    pub reports: Arc<ReportConfig>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Reference date for a request: the explicit `as_of`, else the clock's today.
    pub fn reference_date(&self, as_of: Option<NaiveDate>) -> NaiveDate {
        as_of.unwrap_or_else(|| self.clock.today())
    }
}
