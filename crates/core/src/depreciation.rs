//! Straight-line depreciation snapshot for a single asset.
//!
//! Pure logic. The reference date is always an explicit argument so the same
//! inputs produce bit-identical output.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::asset::Asset;
use crate::rates::DepreciationRateTable;

/// Months per year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Depreciation figures for one asset at one reference date.
///
/// Values are full precision; rounding for display belongs to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Depreciation {
    /// Annual rate applied.
    pub rate: f64,
    /// `price * quantity`, or `0.0` for a degenerate asset.
    pub original_value: f64,
    pub annual: f64,
    pub monthly: f64,
    /// Depreciated to date, capped at `original_value`.
    pub accumulated: f64,
    /// `original_value - accumulated`, never negative.
    pub current_value: f64,
    /// `accumulated / original_value * 100`, or `0.0` for a zero value.
    pub percentage: f64,
    pub years_of_use: i64,
    pub months_elapsed: i64,
}

/// Calendar-month difference between two dates.
///
/// Day-of-month is ignored: the 31st of one month to the 1st of the next is
/// one month. Negative when `today` precedes `acquired`.
pub fn months_elapsed(acquired: NaiveDate, today: NaiveDate) -> i64 {
    let years = i64::from(today.year()) - i64::from(acquired.year());
    let months = i64::from(today.month()) - i64::from(acquired.month());
    years * MONTHS_PER_YEAR + months
}

/// Compute the depreciation snapshot of `asset` as of `today`.
///
/// Degenerate assets (non-positive or NaN price, non-positive quantity, or a
/// total that overflows `f64`) yield an all-zero snapshot. Acquisition dates
/// after `today` count as zero months elapsed.
pub fn compute_depreciation(
    asset: &Asset,
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> Depreciation {
    let rate = rates.rate_for(&asset.asset_type);
    let months = months_elapsed(asset.date, today).max(0);
    let years_of_use = months / MONTHS_PER_YEAR;

    let original_value = asset.total_value();
    // `!(x > 0)` also catches NaN.
    if !(asset.price > 0.0) || asset.quantity <= 0 || !original_value.is_finite() {
        return Depreciation {
            rate,
            original_value: 0.0,
            annual: 0.0,
            monthly: 0.0,
            accumulated: 0.0,
            current_value: 0.0,
            percentage: 0.0,
            years_of_use,
            months_elapsed: months,
        };
    }

    let annual = original_value * rate;
    let monthly = annual / MONTHS_PER_YEAR as f64;
    let accumulated = (monthly * months as f64).min(original_value);
    let current_value = (original_value - accumulated).max(0.0);
    let percentage = accumulated / original_value * 100.0;

    Depreciation {
        rate,
        original_value,
        annual,
        monthly,
        accumulated,
        current_value,
        percentage,
        years_of_use,
        months_elapsed: months,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
