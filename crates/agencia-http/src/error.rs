//! HTTP error mapping
//!
//! The service layer reports error kinds; this boundary maps each kind to a
//! status code and a JSON body. Internal failures are reported opaquely and
//! logged with the real cause.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use agencia_core::ServiceError;

use crate::api::ErrorBody;

/// Wrapper turning a [`ServiceError`] into an HTTP response.
///
/// # Status Code Mapping
///
/// - `MissingField` -> 400 Bad Request (`VALIDATION_ERROR`)
/// - `DuplicateNit` -> 409 Conflict (`DUPLICATE_NIT`)
/// - `UnknownAgency` -> 404 Not Found (`UNKNOWN_AGENCY`)
/// - `QrNotFound` -> 404 Not Found (`QR_NOT_FOUND`)
/// - `Internal` -> 500 Internal Server Error (`INTERNAL_ERROR`, opaque)
#[derive(Debug, Error)]
#[error(transparent)]
pub struct HttpError(#[from] pub ServiceError);

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self.0 {
            ServiceError::MissingField(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.0.to_string())
            }
            ServiceError::DuplicateNit(_) => {
                (StatusCode::CONFLICT, "DUPLICATE_NIT", self.0.to_string())
            }
            ServiceError::UnknownAgency(_) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_AGENCY", self.0.to_string())
            }
            ServiceError::QrNotFound(_) => {
                (StatusCode::NOT_FOUND, "QR_NOT_FOUND", self.0.to_string())
            }
            ServiceError::Internal(detail) => {
                tracing::error!(error = %detail, "Unexpected failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Unexpected internal error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
