//! Inventory-level helpers: id assignment, report filters, search, and
//! grouped totals.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::asset::{Asset, AssetStatus};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Next id for a new asset: the largest existing id plus one, or 1.
pub fn next_asset_id<I>(existing: I) -> DbId
where
    I: IntoIterator<Item = DbId>,
{
    existing.into_iter().max().map_or(1, |max| max + 1)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Report filter. Every criterion is optional; set criteria are AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Acquisition year.
    pub year: Option<i32>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    pub status: Option<AssetStatus>,
    /// Exact category label.
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    /// Inclusive lower bound on the acquisition date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the acquisition date.
    pub end_date: Option<NaiveDate>,
}

impl ReportFilter {
    pub fn matches(&self, asset: &Asset) -> bool {
        if self.year.is_some_and(|y| asset.date.year() != y) {
            return false;
        }
        if let Some(location) = non_empty(&self.location) {
            if !contains_ignore_case(&asset.location, location) {
                return false;
            }
        }
        if let Some(name) = non_empty(&self.name) {
            if !contains_ignore_case(&asset.name, name) {
                return false;
            }
        }
        if self.status.is_some_and(|s| asset.status != s) {
            return false;
        }
        if let Some(asset_type) = non_empty(&self.asset_type) {
            if asset.asset_type != asset_type {
                return false;
            }
        }
        if self.start_date.is_some_and(|start| asset.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| asset.date > end) {
            return false;
        }
        true
    }
}

/// Assets matching `filter`, in input order.
pub fn filter_assets(assets: &[Asset], filter: &ReportFilter) -> Vec<Asset> {
    assets.iter().filter(|a| filter.matches(a)).cloned().collect()
}

/// Case-insensitive search over name, responsible and location.
pub fn search_assets(assets: &[Asset], term: &str) -> Vec<Asset> {
    let term = term.trim();
    assets
        .iter()
        .filter(|a| {
            contains_ignore_case(&a.name, term)
                || contains_ignore_case(&a.responsible, term)
                || contains_ignore_case(&a.location, term)
        })
        .cloned()
        .collect()
}

/// Distinct acquisition years, newest first.
pub fn unique_years(assets: &[Asset]) -> Vec<i32> {
    let mut years: Vec<i32> = assets.iter().map(|a| a.date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Distinct locations, sorted.
pub fn unique_locations(assets: &[Asset]) -> Vec<String> {
    let mut locations: Vec<String> = assets.iter().map(|a| a.location.clone()).collect();
    locations.sort();
    locations.dedup();
    locations
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Dashboard counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStatistics {
    pub total: usize,
    pub available: usize,
    pub assigned: usize,
    pub maintenance: usize,
    pub retired: usize,
    pub total_value: f64,
}

pub fn inventory_statistics(assets: &[Asset]) -> InventoryStatistics {
    let count = |status: AssetStatus| assets.iter().filter(|a| a.status == status).count();
    InventoryStatistics {
        total: assets.len(),
        available: count(AssetStatus::Available),
        assigned: count(AssetStatus::Assigned),
        maintenance: count(AssetStatus::Maintenance),
        retired: count(AssetStatus::Retired),
        total_value: assets.iter().map(Asset::total_value).sum(),
    }
}

// ---------------------------------------------------------------------------
// Grouped totals
// ---------------------------------------------------------------------------

/// Count and value of the assets sharing one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub label: String,
    pub count: usize,
    pub value: f64,
    /// Share of the inventory value, `0.0` when the inventory is worth nothing.
    pub share_percent: f64,
}

/// Totals per status label, in first-seen order.
pub fn group_by_status(assets: &[Asset]) -> Vec<GroupTotal> {
    group_by(assets, |a| a.status.label().to_string())
}

/// Totals per category label, in first-seen order.
pub fn group_by_type(assets: &[Asset]) -> Vec<GroupTotal> {
    group_by(assets, |a| a.asset_type.clone())
}

fn group_by<F>(assets: &[Asset], key: F) -> Vec<GroupTotal>
where
    F: Fn(&Asset) -> String,
{
    let mut groups: Vec<GroupTotal> = Vec::new();
    let mut total_value = 0.0;

    for asset in assets {
        let label = key(asset);
        let value = asset.total_value();
        total_value += value;

        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => {
                group.count += 1;
                group.value += value;
            }
            None => groups.push(GroupTotal {
                label,
                count: 1,
                value,
                share_percent: 0.0,
            }),
        }
    }

    if total_value > 0.0 {
        for group in &mut groups {
            group.share_percent = group.value / total_value * 100.0;
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
