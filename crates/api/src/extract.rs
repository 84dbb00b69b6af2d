//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;
use workout_core::types::DbId;
use workout_core::validation::validate_input;

use crate::error::AppError;

/// A positive workout id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutId(pub DbId);

impl<S> FromRequestParts<S> for WorkoutId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;
        parse_workout_id(&raw).map(WorkoutId).ok_or_else(invalid_id)
    }
}

fn parse_workout_id(raw: &str) -> Option<DbId> {
    raw.parse::<DbId>().ok().filter(|id| *id > 0)
}

fn invalid_id() -> AppError {
    AppError::BadRequest("invalid workout id".into())
}

/// JSON body that has been decoded and passed its `validator` rules.
///
/// Malformed JSON becomes `400 BAD_REQUEST`; rule violations become
/// `400 VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request payload");
                AppError::BadRequest("invalid request payload".into())
            })?;
        validate_input(&value)?;
        Ok(Self(value))
    }
}
