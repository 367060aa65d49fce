//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request (role comes from the path)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    /// Required for realtor/admin signup
    pub product_key: Option<String>,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token response (signup and signin)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

// ============================================================================
// Product Key
// ============================================================================

/// Generate product key request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProductKeyRequest {
    pub email: String,
    pub user_type: UserRole,
}

/// Generate product key response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKeyResponse {
    pub product_key: String,
}

// ============================================================================
// Current Identity
// ============================================================================

/// Decoded bearer claims of the current caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub name: String,
    pub user_id: Uuid,
    pub issued_at: i64,
    pub expires_at: i64,
}
