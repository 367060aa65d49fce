//! Listing Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::presentation::middleware::{self, TokenAuthState};
use platform::token::TokenSigner;

use crate::domain::repository::ListingRepository;
use crate::infra::postgres::PgListingRepository;
use crate::presentation::handlers::{self, ListingAppState};

/// Create the Listing router with PostgreSQL repository
///
/// Mutations share the bearer signer with the auth module.
pub fn listing_router(repo: PgListingRepository, signer: Arc<TokenSigner>) -> Router {
    listing_router_generic(repo, signer)
}

/// Create a generic Listing router for any repository implementation
pub fn listing_router_generic<R>(repo: R, signer: Arc<TokenSigner>) -> Router
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let state = ListingAppState {
        repo: Arc::new(repo),
    };

    let token_state = TokenAuthState { signer };
    let require_auth = axum::middleware::from_fn(move |req, next| {
        middleware::require_identity(token_state.clone(), req, next)
    });

    Router::new()
        .route("/", get(handlers::search::<R>))
        .route("/", post(handlers::create::<R>).layer(require_auth.clone()))
        .route("/{id}", get(handlers::get_by_id::<R>))
        .route("/{id}", put(handlers::update::<R>).layer(require_auth))
        .with_state(state)
}
