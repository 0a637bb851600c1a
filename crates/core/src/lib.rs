//! Asset inventory domain logic.
//!
//! Pure functions only: straight-line depreciation, derived alerts,
//! inventory aggregation, filters and validation. No I/O, no hidden state;
//! the reference date is always passed in (see [`clock`]).

pub mod alert;
pub mod asset;
pub mod clock;
pub mod criticality;
pub mod depreciation;
pub mod error;
pub mod inventory;
pub mod rates;
pub mod summary;
pub mod types;
