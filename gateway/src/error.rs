//! HTTP error mapping for the gateway.
//!
//! Handlers and middleware return [`ApiError`]; the [`IntoResponse`] impl
//! below is the single place failures become `{"error": ...}` JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error::{AppError, AuthError, ErrorResponse};

use crate::upstream::UpstreamError;

/// Route-level error carrying the shared error taxonomy.
#[derive(Debug)]
pub struct ApiError(AppError);

impl ApiError {
    /// Answer 400 with the given client-visible message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(AppError::BadRequest(message.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(AppError::Auth(err))
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        Self(AppError::Upstream(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Auth(AuthError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::Auth(AuthError::MissingToken) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized: token not provided".to_string(),
            ),
            // Invalid and expired tokens share one client-facing answer.
            AppError::Auth(AuthError::InvalidToken | AuthError::TokenExpired) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized: invalid or expired token".to_string(),
            ),
            AppError::Auth(AuthError::TokenCreationFailed) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate token".to_string(),
            ),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream(detail) => {
                tracing::error!("Upstream call failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to perform the sum operation".to_string(),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_and_expired_tokens_map_to_same_response() {
        let invalid = ApiError::from(AuthError::InvalidToken).into_response();
        let expired = ApiError::from(AuthError::TokenExpired).into_response();
        assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_upstream_errors_map_to_500() {
        let err = ApiError::from(UpstreamError::InvalidPayload("bad json".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_keeps_message_visible() {
        let response = ApiError::bad_request("Username and password are required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_errors_hide_detail() {
        use http_body_util::BodyExt;

        let err = ApiError::from(AppError::Internal("secret detail".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
