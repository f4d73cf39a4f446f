//! Credential verification for the login route.

use async_trait::async_trait;
use error::AuthError;

/// Capability interface for checking login credentials.
///
/// The gateway knows exactly one account today, but handlers only depend
/// on this trait, so a directory-backed checker can slot in without
/// touching the route wiring.
#[async_trait]
pub trait CredentialChecker: Send + Sync {
    /// Verify a username/password pair.
    async fn verify(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// Checker backed by the single credential pair from configuration.
#[derive(Debug, Clone)]
pub struct StaticCredentialChecker {
    username: String,
    password: String,
}

impl StaticCredentialChecker {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl CredentialChecker for StaticCredentialChecker {
    async fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username == self.username && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matching_pair_is_accepted() {
        let checker = StaticCredentialChecker::new("admin", "s3cret");
        assert!(checker.verify("admin", "s3cret").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let checker = StaticCredentialChecker::new("admin", "s3cret");
        let result = checker.verify("admin", "nope").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_user_is_rejected() {
        let checker = StaticCredentialChecker::new("admin", "s3cret");
        let result = checker.verify("someone", "s3cret").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
