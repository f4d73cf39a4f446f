//! Request middleware: logging and bearer token authentication.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use error::AuthError;

use crate::error::ApiError;
use crate::state::AppState;

/// Log method and path for every incoming request before dispatch.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    tracing::info!("{} {}", request.method(), request.uri());
    next.run(request).await
}

/// Bearer token authentication for protected routes.
///
/// On success the decoded claims are attached to the request extensions
/// for handlers to read; any failure answers 401 before handler logic
/// runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    let claims = auth::decode_token(token, &state.jwt.secret)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
