/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable. The pool is the only resource shared between
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: workout_db::DbPool,
}
