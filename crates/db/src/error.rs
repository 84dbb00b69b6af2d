use workout_core::types::DbId;

/// Outcome classification for store operations.
///
/// Callers map `NotFound` and `Persistence` to distinct responses; a
/// backend failure is never reported as absence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Workout with id {id} not found")]
    NotFound { id: DbId },

    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}
