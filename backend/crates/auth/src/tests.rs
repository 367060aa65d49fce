//! Unit tests for auth crate

#[cfg(test)]
mod support {
    use std::sync::Mutex;

    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::email::Email;
    use crate::error::AuthResult;
    use kernel::id::UserId;

    /// In-memory user store for use-case tests
    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        pub fn all(&self) -> Vec<User> {
            self.users.lock().unwrap().clone()
        }
    }

    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, user: &User) -> AuthResult<()> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_id == *user_id)
                .cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == *email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| u.email == *email))
        }
    }
}

#[cfg(test)]
mod product_key_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::product_key::{GenerateProductKeyInput, GenerateProductKeyUseCase};
    use crate::domain::value_object::user_role::UserRole;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig {
            product_key_secret: "server-side-generated-key".to_string(),
            ..Default::default()
        })
    }

    fn generate(config: &Arc<AuthConfig>, email: &str, role: UserRole) -> String {
        GenerateProductKeyUseCase::new(config.clone())
            .execute(GenerateProductKeyInput {
                email: email.to_string(),
                role,
            })
            .unwrap()
            .product_key
    }

    #[test]
    fn test_key_verifies_for_exact_pair() {
        let config = config();
        let key = generate(&config, "muma@gmail.com", UserRole::Realtor);

        let material = format!("muma@gmail.com-realtor-{}", config.product_key_secret);
        assert!(platform::secret::verify_secret(material.as_bytes(), &key));
    }

    #[test]
    fn test_key_fails_for_other_email_or_role() {
        let config = config();
        let key = generate(&config, "muma@gmail.com", UserRole::Realtor);

        let other_email = format!("other@gmail.com-realtor-{}", config.product_key_secret);
        assert!(!platform::secret::verify_secret(other_email.as_bytes(), &key));

        let other_role = format!("muma@gmail.com-admin-{}", config.product_key_secret);
        assert!(!platform::secret::verify_secret(other_role.as_bytes(), &key));
    }

    #[test]
    fn test_identical_inputs_produce_distinct_keys_that_both_verify() {
        let config = config();
        let first = generate(&config, "muma@gmail.com", UserRole::Admin);
        let second = generate(&config, "muma@gmail.com", UserRole::Admin);

        // Salted per call
        assert_ne!(first, second);

        let material = format!("muma@gmail.com-admin-{}", config.product_key_secret);
        assert!(platform::secret::verify_secret(material.as_bytes(), &first));
        assert!(platform::secret::verify_secret(material.as_bytes(), &second));
    }

    #[test]
    fn test_generate_normalizes_email_case() {
        let config = config();
        let key = generate(&config, "Muma@Gmail.COM", UserRole::Realtor);

        let material = format!("muma@gmail.com-realtor-{}", config.product_key_secret);
        assert!(platform::secret::verify_secret(material.as_bytes(), &key));
    }

    #[test]
    fn test_generate_rejects_bad_email() {
        let config = config();
        let result = GenerateProductKeyUseCase::new(config).execute(GenerateProductKeyInput {
            email: "not-an-email".to_string(),
            role: UserRole::Realtor,
        });
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod sign_up_tests {
    use std::sync::Arc;

    use platform::token::TokenSigner;

    use super::support::InMemoryUserRepository;
    use crate::application::config::AuthConfig;
    use crate::application::product_key::{GenerateProductKeyInput, GenerateProductKeyUseCase};
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::domain::value_object::user_role::UserRole;
    use crate::error::AuthError;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig {
            product_key_secret: "server-side-generated-key".to_string(),
            token_secret: b"test-token-secret".to_vec(),
            ..Default::default()
        })
    }

    fn use_case(
        repo: Arc<InMemoryUserRepository>,
        config: Arc<AuthConfig>,
    ) -> SignUpUseCase<InMemoryUserRepository> {
        let signer = Arc::new(config.signer());
        SignUpUseCase::new(repo, config, signer)
    }

    fn input(role: UserRole, email: &str, product_key: Option<String>) -> SignUpInput {
        SignUpInput {
            role,
            email: email.to_string(),
            name: "brian".to_string(),
            phone: "4641653".to_string(),
            password: "Str0ng&Secret".to_string(),
            product_key,
        }
    }

    #[tokio::test]
    async fn test_buyer_signup_needs_no_product_key() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let config = config();

        let output = use_case(repo.clone(), config.clone())
            .execute(input(UserRole::Buyer, "buyer@example.com", None))
            .await
            .unwrap();

        assert!(!output.access_token.is_empty());
        let users = repo.all();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::Buyer);
    }

    #[tokio::test]
    async fn test_privileged_signup_without_key_is_unauthorized() {
        for role in [UserRole::Realtor, UserRole::Admin] {
            let repo = Arc::new(InMemoryUserRepository::default());
            let result = use_case(repo.clone(), config())
                .execute(input(role, "realtor@example.com", None))
                .await;

            assert!(matches!(result, Err(AuthError::ProductKeyRejected)));
            assert!(repo.all().is_empty());
        }
    }

    #[tokio::test]
    async fn test_privileged_signup_with_wrong_key_is_unauthorized() {
        let config = config();

        // Key generated for a different email
        let key = GenerateProductKeyUseCase::new(config.clone())
            .execute(GenerateProductKeyInput {
                email: "someone-else@example.com".to_string(),
                role: UserRole::Realtor,
            })
            .unwrap()
            .product_key;

        let repo = Arc::new(InMemoryUserRepository::default());
        let result = use_case(repo, config)
            .execute(input(UserRole::Realtor, "realtor@example.com", Some(key)))
            .await;

        assert!(matches!(result, Err(AuthError::ProductKeyRejected)));
    }

    #[tokio::test]
    async fn test_privileged_signup_with_valid_key_succeeds() {
        let config = config();

        let key = GenerateProductKeyUseCase::new(config.clone())
            .execute(GenerateProductKeyInput {
                email: "realtor@example.com".to_string(),
                role: UserRole::Realtor,
            })
            .unwrap()
            .product_key;

        let repo = Arc::new(InMemoryUserRepository::default());
        let output = use_case(repo.clone(), config)
            .execute(input(UserRole::Realtor, "realtor@example.com", Some(key)))
            .await
            .unwrap();

        assert!(!output.access_token.is_empty());
        let users = repo.all();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::Realtor);
        assert!(users[0].can_own_listings());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_regardless_of_role() {
        let config = config();
        let repo = Arc::new(InMemoryUserRepository::default());

        use_case(repo.clone(), config.clone())
            .execute(input(UserRole::Buyer, "taken@example.com", None))
            .await
            .unwrap();

        let result = use_case(repo.clone(), config.clone())
            .execute(input(UserRole::Buyer, "taken@example.com", None))
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));

        // Same outcome for a privileged role with a valid key
        let key = GenerateProductKeyUseCase::new(config.clone())
            .execute(GenerateProductKeyInput {
                email: "taken@example.com".to_string(),
                role: UserRole::Admin,
            })
            .unwrap()
            .product_key;

        let result = use_case(repo.clone(), config)
            .execute(input(UserRole::Admin, "taken@example.com", Some(key)))
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(repo.all().len(), 1);
    }

    #[tokio::test]
    async fn test_signup_token_carries_name_and_user_id() {
        let config = config();
        let repo = Arc::new(InMemoryUserRepository::default());

        let output = use_case(repo.clone(), config.clone())
            .execute(input(UserRole::Buyer, "buyer@example.com", None))
            .await
            .unwrap();

        let signer = TokenSigner::new(&config.token_secret, config.token_ttl);
        let claims = signer.decode(&output.access_token).unwrap();

        let user = &repo.all()[0];
        assert_eq!(claims.name, "brian");
        assert_eq!(claims.sub, *user.user_id.as_uuid());
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let config = config();
        let repo = Arc::new(InMemoryUserRepository::default());

        use_case(repo.clone(), config)
            .execute(input(UserRole::Buyer, "buyer@example.com", None))
            .await
            .unwrap();

        let user = &repo.all()[0];
        let phc = user.password_hash.as_phc_string();
        assert!(phc.starts_with("$argon2"));
        assert!(!phc.contains("Str0ng&Secret"));
    }
}

#[cfg(test)]
mod sign_in_tests {
    use std::sync::Arc;

    use platform::token::TokenSigner;

    use super::support::InMemoryUserRepository;
    use crate::application::config::AuthConfig;
    use crate::application::sign_in::{SignInInput, SignInUseCase};
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::domain::value_object::user_role::UserRole;
    use crate::error::AuthError;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig {
            token_secret: b"test-token-secret".to_vec(),
            ..Default::default()
        })
    }

    async fn seeded_repo(config: &Arc<AuthConfig>) -> Arc<InMemoryUserRepository> {
        let repo = Arc::new(InMemoryUserRepository::default());
        let signer = Arc::new(config.signer());
        SignUpUseCase::new(repo.clone(), config.clone(), signer)
            .execute(SignUpInput {
                role: UserRole::Buyer,
                email: "muma@gmail.com".to_string(),
                name: "brian".to_string(),
                phone: "4641653".to_string(),
                password: "Str0ng&Secret".to_string(),
                product_key: None,
            })
            .await
            .unwrap();
        repo
    }

    fn use_case(
        repo: Arc<InMemoryUserRepository>,
        config: Arc<AuthConfig>,
    ) -> SignInUseCase<InMemoryUserRepository> {
        let signer = Arc::new(config.signer());
        SignInUseCase::new(repo, config, signer)
    }

    #[tokio::test]
    async fn test_signin_with_correct_password_returns_identity_token() {
        let config = config();
        let repo = seeded_repo(&config).await;

        let output = use_case(repo.clone(), config.clone())
            .execute(SignInInput {
                email: "muma@gmail.com".to_string(),
                password: "Str0ng&Secret".to_string(),
            })
            .await
            .unwrap();

        let signer = TokenSigner::new(&config.token_secret, config.token_ttl);
        let claims = signer.decode(&output.access_token).unwrap();

        let user = &repo.all()[0];
        assert_eq!(claims.name, "brian");
        assert_eq!(claims.sub, *user.user_id.as_uuid());
    }

    #[tokio::test]
    async fn test_signin_is_case_insensitive_on_email() {
        let config = config();
        let repo = seeded_repo(&config).await;

        let result = use_case(repo, config)
            .execute(SignInInput {
                email: "Muma@Gmail.COM".to_string(),
                password: "Str0ng&Secret".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let config = config();
        let repo = seeded_repo(&config).await;

        let wrong_password = use_case(repo.clone(), config.clone())
            .execute(SignInInput {
                email: "muma@gmail.com".to_string(),
                password: "WrongPassword#1".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_email = use_case(repo, config)
            .execute(SignInInput {
                email: "nobody@gmail.com".to_string(),
                password: "Str0ng&Secret".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.kind(), unknown_email.kind());
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::value_object::user_role::UserRole;
    use crate::presentation::dto::*;

    #[test]
    fn test_sign_up_request_deserialization() {
        let json = r#"{
            "name": "brian",
            "phone": "4641653",
            "email": "muma@gmail.com",
            "password": "Str0ng&Secret",
            "productKey": "some-key"
        }"#;
        let req: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.name, "brian");
        assert_eq!(req.product_key.as_deref(), Some("some-key"));
    }

    #[test]
    fn test_sign_up_request_product_key_optional() {
        let json = r#"{
            "name": "brian",
            "phone": "4641653",
            "email": "muma@gmail.com",
            "password": "Str0ng&Secret"
        }"#;
        let req: SignUpRequest = serde_json::from_str(json).unwrap();
        assert!(req.product_key.is_none());
    }

    #[test]
    fn test_token_response_serialization() {
        let json = serde_json::to_string(&TokenResponse {
            access_token: "token123".to_string(),
        })
        .unwrap();
        assert!(json.contains("accessToken"));
    }

    #[test]
    fn test_generate_product_key_request_deserialization() {
        let json = r#"{"email":"muma@gmail.com","userType":"realtor"}"#;
        let req: GenerateProductKeyRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.email, "muma@gmail.com");
        assert_eq!(req.user_type, UserRole::Realtor);
    }

    #[test]
    fn test_product_key_response_serialization() {
        let json = serde_json::to_string(&ProductKeyResponse {
            product_key: "hashed".to_string(),
        })
        .unwrap();
        assert!(json.contains("productKey"));
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::AuthError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::EmailTaken, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::ProductKeyRejected, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::ExpiredToken, StatusCode::UNAUTHORIZED),
            (AuthError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (
                AuthError::PasswordValidation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_product_key_rejection_reveals_nothing() {
        // Missing and mismatched keys share one variant and one message
        assert_eq!(AuthError::ProductKeyRejected.to_string(), "Unauthorized");
    }

    #[test]
    fn test_token_error_conversion() {
        use platform::token::TokenError;

        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::ExpiredToken
        ));
        assert!(matches!(
            AuthError::from(TokenError::Invalid),
            AuthError::InvalidToken
        ));
    }
}
