//! JSON body extractor that reports decode failures in the API error format

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a body that cannot be read or decoded becomes a
/// 400 `VALIDATION_ERROR` instead of axum's plain-text rejection.
pub struct SprintJson<T>(pub T);

impl<S, T> FromRequest<S> for SprintJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(SprintJson(value)),
                Err(rejection) => Err(rejection_to_error(rejection)),
            }
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    log::debug!("Rejected request body: {}", rejection.body_text());

    ApiError::Validation {
        message: format!("Invalid request body: {}", rejection.body_text()),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    }
}
