//! Login route: credential check and token issuance.

use auth::Claims;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Token lifetime marker advertised in the login response.
const EXPIRES_IN: &str = "1h";

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: String,
}

/// POST /login
///
/// Checks the submitted pair against the configured account and answers
/// with a signed bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Absent and empty fields are both treated as missing.
    let username = body.username.as_deref().filter(|u| !u.is_empty());
    let password = body.password.as_deref().filter(|p| !p.is_empty());

    let (username, password) = match (username, password) {
        (Some(username), Some(password)) => (username, password),
        _ => return Err(ApiError::bad_request("Username and password are required")),
    };

    state.credentials.verify(username, password).await?;

    let claims = Claims::new(username, state.jwt.expires_in_secs);
    let token = auth::encode_token(&claims, &state.jwt.secret)?;

    tracing::info!("Issued token for user: {}", username);

    Ok(Json(LoginResponse {
        token,
        message: "Authentication successful".to_string(),
        expires_in: EXPIRES_IN.to_string(),
    }))
}
