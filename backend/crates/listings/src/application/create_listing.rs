//! Create Listing Use Case
//!
//! Creates the listing row bound to the authenticated caller, then the
//! photo references bound to the new listing's id in a single batch.

use std::sync::Arc;

use crate::domain::entity::listing::{Listing, PhotoRef};
use crate::domain::repository::ListingRepository;
use crate::domain::value_object::property_type::PropertyType;
use crate::error::ListingResult;
use kernel::id::UserId;

/// Create listing input
pub struct CreateListingInput {
    pub owner_user_id: UserId,
    pub address: String,
    pub city: String,
    pub price: i64,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    pub photo_urls: Vec<String>,
}

/// Create listing output
pub struct CreateListingOutput {
    pub listing: Listing,
    pub photos: Vec<PhotoRef>,
}

/// Create listing use case
pub struct CreateListingUseCase<R>
where
    R: ListingRepository,
{
    listing_repo: Arc<R>,
}

impl<R> CreateListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(listing_repo: Arc<R>) -> Self {
        Self { listing_repo }
    }

    pub async fn execute(&self, input: CreateListingInput) -> ListingResult<CreateListingOutput> {
        let listing = Listing::new(
            input.owner_user_id,
            input.address,
            input.city,
            input.price,
            input.bedrooms,
            input.bathrooms,
            input.land_size,
            input.property_type,
        );

        self.listing_repo.create(&listing).await?;

        // The two inserts are not wrapped in one transaction; a failure
        // here leaves a photo-less listing behind.
        // TODO: run both inserts inside a single sqlx transaction
        let photos = self
            .listing_repo
            .create_photos(&listing.listing_id, &input.photo_urls)
            .await?;

        tracing::info!(
            listing_id = %listing.listing_id,
            owner_user_id = %listing.owner_user_id,
            photos = photos.len(),
            "Listing created"
        );

        Ok(CreateListingOutput { listing, photos })
    }
}
