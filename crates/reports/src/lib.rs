//! Report renderers for the asset inventory.
//!
//! Every renderer takes engine output from `inventario_core` and formats it
//! for a deliverable document. Figures are rounded to two decimals here and
//! only here; the engine always yields full precision.

pub mod config;
pub mod csv_report;
pub mod error;
pub mod format;
pub mod xml_report;

pub use config::ReportConfig;
pub use error::ReportError;
