/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses and wraps axum's
 * JSON extractor so malformed bodies produce the same error shape as every
 * other failure.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Title is required",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejection is a [`BackendError::Validation`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(BackendError::validation(rejection.body_text()))
            }
        }
    }
}

/// Router fallback for unknown paths
pub async fn not_found_fallback() -> BackendError {
    BackendError::not_found("Route not found")
}
