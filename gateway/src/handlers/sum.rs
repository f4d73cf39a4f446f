//! Sum route: proxies one call to the upstream numbers service.

use auth::Claims;
use axum::extract::State;
use axum::{Extension, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::upstream::UpstreamError;

/// Successful sum response.
#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub result: i64,
    pub operation: String,
    pub user: String,
    pub timestamp: String,
}

/// GET /sum
///
/// Fetches two numbers from the upstream service and answers with their
/// sum. An unreachable or misbehaving upstream becomes a 500, never a
/// crash.
pub async fn sum(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<SumResponse>, ApiError> {
    let payload = state.numbers.fetch_numbers().await?;

    // A pair whose sum leaves the i64 range counts as a bad payload.
    let result = payload.num1.checked_add(payload.num2).ok_or_else(|| {
        UpstreamError::InvalidPayload(format!(
            "sum of {} and {} overflows",
            payload.num1, payload.num2
        ))
    })?;

    Ok(Json(SumResponse {
        result,
        operation: format!("{} + {}", payload.num1, payload.num2),
        user: claims.username,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
