//! Get Listing Use Case
//!
//! Fetches the full detail projection: every photo in order plus the
//! owner's public contact fields.

use std::sync::Arc;

use crate::domain::entity::listing::ListingDetail;
use crate::domain::repository::ListingRepository;
use crate::error::{ListingError, ListingResult};
use kernel::id::ListingId;

/// Get listing use case
pub struct GetListingUseCase<R>
where
    R: ListingRepository,
{
    listing_repo: Arc<R>,
}

impl<R> GetListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(listing_repo: Arc<R>) -> Self {
        Self { listing_repo }
    }

    pub async fn execute(&self, listing_id: ListingId) -> ListingResult<ListingDetail> {
        self.listing_repo
            .find_detail_by_id(&listing_id)
            .await?
            .ok_or(ListingError::NotFound)
    }
}
