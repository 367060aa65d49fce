//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{self, TokenAuthState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<U>(repo: U, config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let signer = Arc::new(config.signer());
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        signer: signer.clone(),
    };

    let token_state = TokenAuthState { signer };

    let protected = Router::new()
        .route("/me", get(handlers::me))
        .layer(axum::middleware::from_fn(move |req, next| {
            middleware::require_identity(token_state.clone(), req, next)
        }));

    Router::new()
        .route("/signup/{role}", post(handlers::sign_up::<U>))
        .route("/signin", post(handlers::sign_in::<U>))
        .route("/key", post(handlers::generate_product_key::<U>))
        .merge(protected)
        .with_state(state)
}
