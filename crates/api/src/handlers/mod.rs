pub mod assets;
pub mod depreciation;
pub mod reports;
