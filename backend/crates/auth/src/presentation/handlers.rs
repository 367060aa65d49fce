//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::{
    GenerateProductKeyInput, GenerateProductKeyUseCase, SignInInput, SignInUseCase, SignUpInput,
    SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    GenerateProductKeyRequest, IdentityResponse, ProductKeyResponse, SignInRequest, SignUpRequest,
    TokenResponse,
};
use crate::presentation::middleware::Identity;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
    pub signer: Arc<TokenSigner>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup/{role}
pub async fn sign_up<U>(
    State(state): State<AuthAppState<U>>,
    Path(role): Path<String>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let role: UserRole = role
        .parse()
        .map_err(|e: crate::AppError| AuthError::Validation(e.to_string()))?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone(), state.signer.clone());

    let input = SignUpInput {
        role,
        email: req.email,
        name: req.name,
        phone: req.phone,
        password: req.password,
        product_key: req.product_key,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        access_token: output.access_token,
    }))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<U>(
    State(state): State<AuthAppState<U>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone(), state.signer.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        access_token: output.access_token,
    }))
}

// ============================================================================
// Product Key
// ============================================================================

/// POST /api/auth/key
pub async fn generate_product_key<U>(
    State(state): State<AuthAppState<U>>,
    Json(req): Json<GenerateProductKeyRequest>,
) -> AuthResult<Json<ProductKeyResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GenerateProductKeyUseCase::new(state.config.clone());

    let output = use_case.execute(GenerateProductKeyInput {
        email: req.email,
        role: req.user_type,
    })?;

    Ok(Json(ProductKeyResponse {
        product_key: output.product_key,
    }))
}

// ============================================================================
// Current Identity
// ============================================================================

/// GET /api/auth/me
pub async fn me(Identity(claims): Identity) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        name: claims.name,
        user_id: claims.sub,
        issued_at: claims.iat,
        expires_at: claims.exp,
    })
}
