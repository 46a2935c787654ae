//! JWT token issuance and validation
//!
//! The signing key is derived once from the configured secret and held
//! behind an `Arc`; it is never rotated while the process runs.

use super::{AuthError, AuthUser};
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Login identifier at issuance time
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// HMAC key pair built from one secret
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Token service
///
/// Cloning shares the same key material.
#[derive(Clone)]
pub struct JwtService {
    keys: Arc<SigningKeys>,
    validation: Arc<Validation>,
    token_expiry_secs: i64,
}

impl JwtService {
    /// Build the service from a secret. Call once at startup.
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Stateless validation: no clock-skew allowance
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            keys: Arc::new(SigningKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            validation: Arc::new(validation),
            token_expiry_secs,
        }
    }

    /// Issue a token for an authenticated identity, valid from now
    #[inline]
    pub fn issue(&self, identity: &AuthUser) -> Result<String> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(&self, identity: &AuthUser, issued_at: DateTime<Utc>) -> Result<String> {
        let exp = Duration::try_seconds(self.token_expiry_secs)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Token expiry of {}s is out of range",
                    self.token_expiry_secs
                )
            })?;

        let claims = Claims {
            sub: identity.user_id.to_string(),
            username: identity.username.clone(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Validate a token and return the identity it carries
    pub fn validate(&self, token: &str) -> Result<AuthUser, AuthError> {
        let claims = decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => {
                    debug!(error = %e, "Rejected token");
                    AuthError::MalformedToken
                }
            })?
            .claims;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::MalformedToken)?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
        })
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}
