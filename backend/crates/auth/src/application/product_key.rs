//! Generate Product Key Use Case
//!
//! Derives and hashes the product-key material for a prospective
//! realtor/admin. The resulting hash is handed out-of-band and submitted
//! back at signup, where it is checked with `verify_secret` - the hash is
//! salted per call, so two keys for the same pair differ as strings yet
//! both verify.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Generate product key input
pub struct GenerateProductKeyInput {
    pub email: String,
    pub role: UserRole,
}

/// Generate product key output
pub struct GenerateProductKeyOutput {
    pub product_key: String,
}

/// Generate product key use case
pub struct GenerateProductKeyUseCase {
    config: Arc<AuthConfig>,
}

impl GenerateProductKeyUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: GenerateProductKeyInput) -> AuthResult<GenerateProductKeyOutput> {
        let email = Email::new(input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        let material = product_key_material(&email, input.role, &self.config.product_key_secret);
        let product_key = platform::secret::hash_secret(material.as_bytes())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(role = %input.role, "Product key generated");

        Ok(GenerateProductKeyOutput { product_key })
    }
}

/// Plaintext material a product key is derived from and verified against
///
/// Both the generation and the signup verification path must build this
/// string identically; the email is already normalized by `Email::new`.
pub(crate) fn product_key_material(email: &Email, role: UserRole, server_secret: &str) -> String {
    format!("{}-{}-{}", email.as_str(), role.code(), server_secret)
}
