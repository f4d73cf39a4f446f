//! Shared application state for route handlers.

use std::sync::Arc;

use auth::JwtConfig;

use crate::config::GatewayConfig;
use crate::credentials::{CredentialChecker, StaticCredentialChecker};
use crate::upstream::{HttpNumbersService, NumbersService};

/// Bearer tokens are valid for one hour.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Read-only state shared by all routes.
#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<JwtConfig>,
    pub credentials: Arc<dyn CredentialChecker>,
    pub numbers: Arc<dyn NumbersService>,
}

impl AppState {
    /// Assemble the production wiring from configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            jwt: Arc::new(JwtConfig::new(config.jwt_secret.clone(), TOKEN_TTL_SECS)),
            credentials: Arc::new(StaticCredentialChecker::new(
                config.auth_username.clone(),
                config.auth_password.clone(),
            )),
            numbers: Arc::new(HttpNumbersService::new(config.num_service_url.clone())),
        }
    }
}
