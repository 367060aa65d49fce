//! Search Listings Use Case
//!
//! Queries the summary projection with a per-call filter. A search that
//! matches nothing is an error, not an empty success; callers must handle
//! it explicitly.

use std::sync::Arc;

use crate::domain::entity::listing::ListingSummary;
use crate::domain::filter::ListingFilter;
use crate::domain::repository::ListingRepository;
use crate::error::{ListingError, ListingResult};

/// Search listings use case
pub struct SearchListingsUseCase<R>
where
    R: ListingRepository,
{
    listing_repo: Arc<R>,
}

impl<R> SearchListingsUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(listing_repo: Arc<R>) -> Self {
        Self { listing_repo }
    }

    pub async fn execute(&self, filter: ListingFilter) -> ListingResult<Vec<ListingSummary>> {
        let summaries = self.listing_repo.find_summaries(&filter).await?;

        if summaries.is_empty() {
            return Err(ListingError::EmptySearch);
        }

        tracing::debug!(
            results = summaries.len(),
            match_all = filter.is_match_all(),
            "Listing search completed"
        );

        Ok(summaries)
    }
}
