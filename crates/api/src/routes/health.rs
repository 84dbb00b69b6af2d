//! Liveness and database reachability at `GET /health`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `"available"` when the store answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

impl HealthStatus {
    fn from_database(reachable: bool) -> (StatusCode, Self) {
        let (code, status, database) = if reachable {
            (StatusCode::OK, "available", "up")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        };
        let body = Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        };
        (code, body)
    }
}

/// GET /health -- 200 when the database answers `SELECT 1`, 503 otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let reachable = match workout_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };
    let (code, body) = HealthStatus::from_database(reachable);
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
