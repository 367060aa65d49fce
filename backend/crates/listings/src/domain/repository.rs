//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::listing::{Listing, ListingDetail, ListingPatch, ListingSummary, PhotoRef};
use crate::domain::filter::ListingFilter;
use crate::error::ListingResult;
use kernel::id::ListingId;

/// Listing repository trait
#[trait_variant::make(ListingRepository: Send)]
pub trait LocalListingRepository {
    /// Query summaries matching the filter
    async fn find_summaries(&self, filter: &ListingFilter) -> ListingResult<Vec<ListingSummary>>;

    /// Find a listing by ID
    async fn find_by_id(&self, listing_id: &ListingId) -> ListingResult<Option<Listing>>;

    /// Find the full detail projection by ID
    async fn find_detail_by_id(
        &self,
        listing_id: &ListingId,
    ) -> ListingResult<Option<ListingDetail>>;

    /// Create a new listing
    async fn create(&self, listing: &Listing) -> ListingResult<()>;

    /// Apply a sparse patch and return the updated listing
    async fn update(
        &self,
        listing_id: &ListingId,
        patch: &ListingPatch,
    ) -> ListingResult<Listing>;

    /// Create photo references for a listing in one batch, preserving order
    async fn create_photos(
        &self,
        listing_id: &ListingId,
        urls: &[String],
    ) -> ListingResult<Vec<PhotoRef>>;
}
