//! Sign Up Use Case
//!
//! Creates a new user account and issues a bearer token.
//! Privileged roles (Realtor, Admin) must present a valid product key.

use std::sync::Arc;

use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::product_key::product_key_material;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    phone::PhoneNumber,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub role: UserRole,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub password: String,
    pub product_key: Option<String>,
}

/// Sign up output
pub struct SignUpOutput {
    pub access_token: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    signer: Arc<TokenSigner>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>, signer: Arc<TokenSigner>) -> Self {
        Self {
            user_repo,
            config,
            signer,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate email
        let email = Email::new(input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Privileged roles must present a key derived from exactly this
        // email + role pair. Missing and mismatched keys get the same
        // error so the response reveals nothing about the cause.
        if input.role.is_privileged() {
            let product_key = input
                .product_key
                .as_deref()
                .ok_or(AuthError::ProductKeyRejected)?;

            let material =
                product_key_material(&email, input.role, &self.config.product_key_secret);

            if !platform::secret::verify_secret(material.as_bytes(), product_key) {
                return Err(AuthError::ProductKeyRejected);
            }
        }

        // Check for an existing account
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate phone number
        let phone =
            PhoneNumber::new(input.phone).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Create and persist the account
        let user = User::new(email, input.name, phone, password_hash, input.role);
        self.user_repo.create(&user).await?;

        // Issue a token bound to the new identity
        let access_token = self
            .signer
            .issue(&user.name, user.user_id.into_uuid())
            .map_err(AuthError::from)?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User signed up"
        );

        Ok(SignUpOutput { access_token })
    }
}
