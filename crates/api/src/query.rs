//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

/// Reference-date override (`?as_of=YYYY-MM-DD`).
///
/// Absent means "today" according to the state's clock.
#[derive(Debug, Default, Deserialize)]
pub struct AsOfParams {
    pub as_of: Option<NaiveDate>,
}

/// Free-text search (`?q=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
