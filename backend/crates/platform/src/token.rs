//! Bearer Token Signing and Verification
//!
//! Compact signed tokens (JWT, HS256) carrying identity claims with a
//! fixed, configuration-supplied TTL. Tokens are tamper-evident via the
//! signing secret; nothing is persisted server-side.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature check failed or token is structurally malformed
    #[error("Token is invalid")]
    Invalid,

    /// Current time exceeds the encoded expiry
    #[error("Token has expired")]
    Expired,

    /// Signing operation failed
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Claims carried by an issued token
///
/// Reconstructed per request from the bearer token; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Display name of the authenticated user
    pub name: String,
    /// User ID (subject)
    pub sub: Uuid,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Issues and decodes HS256-signed bearer tokens
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    /// Create a signer from a shared secret and a fixed token TTL
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token bound to the given identity
    pub fn issue(&self, name: &str, user_id: Uuid) -> Result<String, TokenError> {
        let iat = unix_now();
        let claims = IdentityClaims {
            name: name.to_string(),
            sub: user_id,
            iat,
            exp: iat + self.ttl.as_secs() as i64,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Decode and verify a token, returning its claims
    ///
    /// Fails with [`TokenError::Expired`] once the encoded expiry has
    /// passed, and [`TokenError::Invalid`] for any signature or structure
    /// problem.
    pub fn decode(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match jsonwebtoken::decode::<IdentityClaims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }

    /// The fixed TTL applied to every issued token
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
