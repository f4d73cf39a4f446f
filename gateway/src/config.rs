//! Gateway configuration loaded from environment variables.

use anyhow::Context;

/// Gateway service configuration.
///
/// Values are read once at startup and shared with components at
/// construction; the struct is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP listen port
    pub port: u16,

    /// Secret key used to sign and verify bearer tokens
    pub jwt_secret: String,

    /// URL of the upstream numbers service
    pub num_service_url: String,

    /// Username of the single configured account
    pub auth_username: String,

    /// Password of the single configured account
    pub auth_password: String,

    /// Service version
    pub version: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 6000,
            jwt_secret: String::new(),
            num_service_url: String::new(),
            auth_username: String::new(),
            auth_password: String::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// `JWT_SECRET` has no usable default and aborts startup when unset;
    /// every other variable falls back to the defaults above.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        config.jwt_secret = std::env::var("JWT_SECRET")
            .context("JWT_SECRET environment variable must be set")?;

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        if let Ok(url) = std::env::var("NUM_SERVICE_URL") {
            config.num_service_url = url;
        }

        if let Ok(username) = std::env::var("AUTH_USERNAME") {
            config.auth_username = username;
        }

        if let Ok(password) = std::env::var("AUTH_PASSWORD") {
            config.auth_password = password;
        }

        Ok(config)
    }

    /// Socket address the HTTP server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.port, 6000);
        assert!(config.jwt_secret.is_empty());
        assert!(config.num_service_url.is_empty());
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_listen_addr_uses_port() {
        let config = GatewayConfig {
            port: 8080,
            ..GatewayConfig::default()
        };
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }
}
