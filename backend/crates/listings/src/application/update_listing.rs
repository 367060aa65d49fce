//! Update Listing Use Case
//!
//! Ownership-gated partial update. The caller's id must equal the stored
//! owner id; being a realtor or admin for some other listing grants
//! nothing here.

use std::sync::Arc;

use crate::domain::entity::listing::{Listing, ListingPatch};
use crate::domain::repository::ListingRepository;
use crate::error::{ListingError, ListingResult};
use kernel::id::{ListingId, UserId};

/// Update listing input
pub struct UpdateListingInput {
    pub caller_user_id: UserId,
    pub listing_id: ListingId,
    pub patch: ListingPatch,
}

/// Update listing use case
pub struct UpdateListingUseCase<R>
where
    R: ListingRepository,
{
    listing_repo: Arc<R>,
}

impl<R> UpdateListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(listing_repo: Arc<R>) -> Self {
        Self { listing_repo }
    }

    pub async fn execute(&self, input: UpdateListingInput) -> ListingResult<Listing> {
        let listing = self
            .listing_repo
            .find_by_id(&input.listing_id)
            .await?
            .ok_or(ListingError::NotFound)?;

        if !listing.is_owned_by(&input.caller_user_id) {
            return Err(ListingError::NotOwner);
        }

        let updated = self
            .listing_repo
            .update(&input.listing_id, &input.patch)
            .await?;

        tracing::info!(
            listing_id = %updated.listing_id,
            "Listing updated"
        );

        Ok(updated)
    }
}
