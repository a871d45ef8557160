use crate::validation::ValidationFailure;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept as the caller supplied it, which may not be a valid UUID.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),
}
