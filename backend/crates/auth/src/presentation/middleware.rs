//! Bearer Token Middleware
//!
//! Middleware and extractor for requiring an authenticated identity on
//! protected routes. Decodes the `Authorization: Bearer` token and stores
//! the claims in request extensions for handlers to consume.

use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::token::{IdentityClaims, TokenSigner};

use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct TokenAuthState {
    pub signer: Arc<TokenSigner>,
}

/// Middleware that requires a valid bearer token
///
/// On success the decoded [`IdentityClaims`] are inserted into request
/// extensions; expired and invalid tokens are rejected with 401.
pub async fn require_identity(
    state: TokenAuthState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = match decode_bearer(req.headers(), &state.signer) {
        Ok(claims) => claims,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Decode the bearer token from the Authorization header
fn decode_bearer(headers: &HeaderMap, signer: &TokenSigner) -> Result<IdentityClaims, AuthError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::InvalidToken)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidToken)?;

    signer.decode(token).map_err(AuthError::from)
}

/// Extractor handing the authenticated caller's claims to a handler
///
/// Requires [`require_identity`] to have run on the route.
pub struct Identity(pub IdentityClaims);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityClaims>()
            .cloned()
            .map(Identity)
            .ok_or_else(|| AuthError::InvalidToken.into_response())
    }
}
