//! JWT claim set carried by gateway bearer tokens.

use serde::{Deserialize, Serialize};

/// JWT claims structure.
///
/// The token encodes the authenticated username plus standard issued-at
/// and expiry timestamps; nothing else is carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated username
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create new claims for a user, valid for `expires_in_secs` from now.
    pub fn new(username: impl Into<String>, expires_in_secs: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            username: username.into(),
            iat: now,
            exp: now + expires_in_secs,
        }
    }

    /// Check if the claims have expired.
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }
}
