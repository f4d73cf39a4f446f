//! Info route: service metadata for authenticated callers.

use auth::Claims;
use axum::{Extension, Json};
use serde::Serialize;

/// Human-readable service name advertised by /info.
const SERVICE_NAME: &str = "Sum API with JWT authentication";

/// One entry in the endpoint listing.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// Service metadata response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub service: &'static str,
    pub user: String,
    pub endpoints: Vec<EndpointInfo>,
}

/// GET /info
///
/// The listing includes /health, which is advertised but not routed.
pub async fn info(Extension(claims): Extension<Claims>) -> Json<InfoResponse> {
    Json(InfoResponse {
        service: SERVICE_NAME,
        user: claims.username,
        endpoints: vec![
            EndpointInfo {
                path: "/login",
                method: "POST",
                description: "User authentication and token generation",
            },
            EndpointInfo {
                path: "/sum",
                method: "GET",
                description: "Fetches two numbers and returns their sum",
            },
            EndpointInfo {
                path: "/info",
                method: "GET",
                description: "Information about the API",
            },
            EndpointInfo {
                path: "/health",
                method: "GET",
                description: "Information about the API health",
            },
        ],
    })
}
