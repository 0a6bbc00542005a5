//! JWT token handling

use crate::auth::models::User;
use crate::config::AuthConfig;
use crate::error::{Error, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User identifier
    pub id: String,
    /// Email address
    pub email: String,
    /// Expiration time (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Create claims from a user, expiring after the configured lifetime
    pub fn from_user(user: &User, lifetime_minutes: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            exp: now + lifetime_minutes * 60,
        }
    }

    /// Check if the claims are past their expiry
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }
}

/// Create a signed HS256 token for a user
pub fn create_token(user: &User, auth: &AuthConfig) -> Result<String> {
    let claims = Claims::from_user(user, auth.token_lifetime_minutes);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
    .map_err(|e| Error::Token(format!("Failed to create token: {}", e)))
}

/// Validate and decode a token against the configured secret
///
/// Returns the raw decode error so callers can tell a signature mismatch
/// apart from a malformed or expired token.
pub fn validate_token(
    token: &str,
    auth: &AuthConfig,
) -> std::result::Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    // No clock-skew allowance: a token is unusable the second it expires
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}
