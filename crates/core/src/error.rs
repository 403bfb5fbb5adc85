use crate::status::DevisStatus;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A form-level check failed before any request was built. The inner
    /// message is user-facing and rendered inline next to the form.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested status change is not in the permitted transition set.
    #[error("Status transition not permitted: {from} -> {to}")]
    Transition { from: DevisStatus, to: DevisStatus },
}
