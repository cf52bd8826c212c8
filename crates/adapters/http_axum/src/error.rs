//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devstate_domain::error::{DevStateError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Maps [`DevStateError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DevStateError);

impl From<DevStateError> for ApiError {
    fn from(err: DevStateError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DevStateError::Validation(err) => {
                tracing::debug!(error = %err, "request rejected");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn should_map_validation_error_to_bad_request() {
        let response = ApiError::from(ValidationError::MissingCommandOrValue).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Missing command or value"})
        );
    }
}
