//! Application Configuration
//!
//! Configuration for the Auth application layer. Read-only after process
//! start; secrets are injected at construction and never logged.

use std::time::Duration;

use platform::token::TokenSigner;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Server-wide secret mixed into product-key material
    pub product_key_secret: String,
    /// Secret for signing bearer tokens (HS256)
    pub token_secret: Vec<u8>,
    /// Fixed TTL applied to every issued token
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            product_key_secret: String::new(),
            token_secret: vec![0u8; 32],
            token_ttl: Duration::from_secs(3600), // 1 hour
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with random secrets (for development)
    pub fn with_random_secrets() -> Self {
        use rand::RngCore;
        use rand::distr::{Alphanumeric, SampleString};

        let mut token_secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut token_secret);

        Self {
            product_key_secret: Alphanumeric.sample_string(&mut rand::rng(), 32),
            token_secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secrets()
    }

    /// Build the token signer for this configuration
    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret, self.token_ttl)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("product_key_secret", &"[REDACTED]")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
