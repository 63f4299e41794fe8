//! Request extractors that report failures with the JSON error body.
//!
//! - `ValidatedJson`: deserialization combined with validation
//! - `IdPath`: path parameters, rejecting unparsable values as bad requests

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::describe_validation_errors;

/// Validated JSON extractor that rejects bodies failing `Validate`.
///
/// Malformed JSON becomes `AppError::BadRequest`; field failures become a
/// single `AppError::Validation` listing every failing field.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(describe_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Path extractor whose rejection is an `AppError::BadRequest`.
///
/// `/api/employers/abc` fails here instead of with axum's plain-text body.
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(IdPath(value))
    }
}
