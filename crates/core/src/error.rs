use crate::types::DbId;

/// Domain error taxonomy.
///
/// `Pattern` is kept distinct from `Internal` so an invalid user-supplied
/// regular expression is always reported as a client error, never as a
/// generic server failure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
