/// Asset identifiers are assigned by the inventory store (max existing + 1).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
