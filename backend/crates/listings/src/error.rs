//! Listing Error Types
//!
//! This module provides listing-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Listing-specific result type alias
pub type ListingResult<T> = Result<T, ListingError>;

/// Listing-specific error variants
#[derive(Debug, Error)]
pub enum ListingError {
    /// Listing not found by id
    #[error("Listing not found")]
    NotFound,

    /// Search matched no listings. An empty result set is an error in
    /// this API, not an empty success.
    #[error("No listings matched the search")]
    EmptySearch,

    /// Caller does not own the listing being mutated
    #[error("Unauthorized")]
    NotOwner,

    /// Input validation error
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ListingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListingError::NotFound | ListingError::EmptySearch => StatusCode::NOT_FOUND,
            ListingError::NotOwner => StatusCode::UNAUTHORIZED,
            ListingError::Validation(_) => StatusCode::BAD_REQUEST,
            ListingError::Database(_) | ListingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListingError::NotFound | ListingError::EmptySearch => ErrorKind::NotFound,
            ListingError::NotOwner => ErrorKind::Unauthorized,
            ListingError::Validation(_) => ErrorKind::BadRequest,
            ListingError::Database(_) | ListingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ListingError::Database(e) => {
                tracing::error!(error = %e, "Listing database error");
            }
            ListingError::Internal(msg) => {
                tracing::error!(message = %msg, "Listing internal error");
            }
            ListingError::NotOwner => {
                tracing::warn!("Listing mutation by non-owner rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Listing error");
            }
        }
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ListingError {
    fn from(err: AppError) -> Self {
        ListingError::Internal(err.to_string())
    }
}
