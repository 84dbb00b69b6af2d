//! Handlers for the `/workouts` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use workout_core::error::CoreError;
use workout_core::types::DbId;
use workout_core::workout::{NewWorkout, UpdateWorkout, WORKOUT_ENTITY};
use workout_db::repositories::WorkoutRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, WorkoutId};
use crate::response::WorkoutResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: WORKOUT_ENTITY,
        id,
    })
}

/// POST /workouts
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewWorkout>,
) -> AppResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = WorkoutRepo::create(&state.pool, &input).await?;
    tracing::info!(
        workout_id = workout.id,
        entries = workout.entries.len(),
        "Workout created"
    );
    Ok((StatusCode::CREATED, Json(WorkoutResponse { workout })))
}

/// GET /workouts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    WorkoutId(id): WorkoutId,
) -> AppResult<Json<WorkoutResponse>> {
    let workout = WorkoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(WorkoutResponse { workout }))
}

/// PUT /workouts/{id}
///
/// Fetches the current workout, merges the present fields of `input` onto
/// it, and stores the result as a full replacement. An update with no
/// fields present returns the current workout without writing.
///
/// The fetch and the write are separate transactions; a concurrent writer
/// can land in between and be overwritten.
pub async fn update(
    State(state): State<AppState>,
    WorkoutId(id): WorkoutId,
    ValidJson(input): ValidJson<UpdateWorkout>,
) -> AppResult<Json<WorkoutResponse>> {
    let existing = WorkoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if input.is_empty() {
        tracing::debug!(workout_id = id, "Empty update, nothing to write");
        return Ok(Json(WorkoutResponse { workout: existing }));
    }

    let merged = existing.apply_update(input);
    let workout = WorkoutRepo::update(&state.pool, &merged).await?;
    tracing::info!(workout_id = id, "Workout updated");
    Ok(Json(WorkoutResponse { workout }))
}

/// DELETE /workouts/{id}
pub async fn delete(
    State(state): State<AppState>,
    WorkoutId(id): WorkoutId,
) -> AppResult<StatusCode> {
    WorkoutRepo::delete(&state.pool, id).await?;
    tracing::info!(workout_id = id, "Workout deleted");
    Ok(StatusCode::NO_CONTENT)
}
