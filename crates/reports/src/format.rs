//! Display formatting shared by all renderers.

use chrono::NaiveDate;

/// Two-decimal amount, e.g. `1340.00`.
pub fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Two-decimal amount with a dollar sign, e.g. `$1340.00`.
pub fn dollars(value: f64) -> String {
    format!("${value:.2}")
}

/// Two-decimal percentage with sign, e.g. `33.00%`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Annual rate as a whole percentage, e.g. `0.33` -> `33%`.
pub fn rate_percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

/// ISO date, e.g. `2024-06-15`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Local (Ecuador) date, e.g. `15/6/2024`.
pub fn local_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}
