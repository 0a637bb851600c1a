use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Malformed record: missing or invalid field '{field}'")]
    MalformedRecord { field: &'static str },

    #[error("Internal error: {0}")]
    Internal(String),
}
