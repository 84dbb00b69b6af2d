//! Route definitions for the `/workouts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Workout routes.
///
/// ```text
/// POST   /workouts          -> create
/// GET    /workouts/{id}     -> get_by_id
/// PUT    /workouts/{id}     -> update
/// DELETE /workouts/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workouts", post(workout::create))
        .route(
            "/workouts/{id}",
            get(workout::get_by_id)
                .put(workout::update)
                .delete(workout::delete),
        )
}
