//! Response envelope types for API handlers.
//!
//! Successful workout responses use a `{ "workout": ... }` envelope. Error
//! bodies are produced by [`crate::error::AppError`].

use serde::Serialize;
use workout_core::workout::Workout;

/// Standard `{ "workout": W }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(WorkoutResponse { workout }))
/// ```
#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub workout: Workout,
}
