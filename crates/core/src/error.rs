use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The article's current status/flags do not allow the requested transition.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Structurally disallowed action on otherwise valid data.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Reconstruction attempted while non-`same` spans are still undecided.
    #[error("{pending} change(s) are still pending a decision")]
    IncompleteDecision { pending: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}
