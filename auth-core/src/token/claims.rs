use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Validity window applied by [`Claims::for_identity`].
pub const TOKEN_TTL_MINUTES: i64 = 15;

/// Access token claims.
///
/// The full payload of every token this service issues: subject identifier,
/// subject email, issued-at, and expiry. Validity is determined entirely by
/// signature and `exp`; there is no server-side revocation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,

    /// Subject email at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for an authenticated identity, expiring
    /// [`TOKEN_TTL_MINUTES`] from now.
    pub fn for_identity(subject: impl ToString, email: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(TOKEN_TTL_MINUTES);

        Self {
            sub: subject.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Check whether the token is expired at the given Unix timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
