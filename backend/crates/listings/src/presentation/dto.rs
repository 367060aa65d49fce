//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::listing::{
    Listing, ListingDetail, ListingPatch, ListingSummary, PhotoRef,
};
use crate::domain::value_object::property_type::PropertyType;

// ============================================================================
// Search
// ============================================================================

/// Search query parameters
///
/// All optional; `minPrice` and `propertyType` arrive as raw strings and
/// are parsed into the filter (unparseable values impose no condition).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub city: Option<String>,
    pub min_price: Option<String>,
    pub property_type: Option<String>,
}

/// Search result entry (summary projection, one thumbnail at most)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummaryResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: i64,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    pub cover_photo_url: Option<String>,
}

impl From<ListingSummary> for ListingSummaryResponse {
    fn from(summary: ListingSummary) -> Self {
        Self {
            id: summary.listing_id.into_uuid(),
            address: summary.address,
            city: summary.city,
            price: summary.price,
            number_of_bedrooms: summary.bedrooms,
            number_of_bathrooms: summary.bathrooms,
            land_size: summary.land_size,
            property_type: summary.property_type,
            cover_photo_url: summary.cover_photo_url,
        }
    }
}

// ============================================================================
// Detail
// ============================================================================

/// Photo reference payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDto {
    pub url: String,
}

impl From<PhotoRef> for PhotoDto {
    fn from(photo: PhotoRef) -> Self {
        Self { url: photo.url }
    }
}

/// Owner contact fields (never the password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerContactDto {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Full detail projection response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetailResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: i64,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    pub photos: Vec<PhotoDto>,
    pub owner: OwnerContactDto,
}

impl From<ListingDetail> for ListingDetailResponse {
    fn from(detail: ListingDetail) -> Self {
        Self {
            id: detail.listing.listing_id.into_uuid(),
            address: detail.listing.address,
            city: detail.listing.city,
            price: detail.listing.price,
            number_of_bedrooms: detail.listing.bedrooms,
            number_of_bathrooms: detail.listing.bathrooms,
            land_size: detail.listing.land_size,
            property_type: detail.listing.property_type,
            photos: detail.photos.into_iter().map(PhotoDto::from).collect(),
            owner: OwnerContactDto {
                name: detail.owner.name,
                email: detail.owner.email,
                phone: detail.owner.phone,
            },
        }
    }
}

// ============================================================================
// Create / Update
// ============================================================================

/// Create listing request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub address: String,
    pub city: String,
    pub price: i64,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    #[serde(default)]
    pub photos: Vec<PhotoDto>,
}

/// Update listing request (sparse; absent fields stay untouched)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    pub address: Option<String>,
    pub city: Option<String>,
    pub price: Option<i64>,
    pub number_of_bedrooms: Option<i32>,
    pub number_of_bathrooms: Option<f64>,
    pub land_size: Option<f64>,
    pub property_type: Option<PropertyType>,
}

impl UpdateListingRequest {
    /// Convert into the domain patch, preserving field presence
    pub fn into_patch(self) -> ListingPatch {
        ListingPatch {
            address: self.address,
            city: self.city,
            price: self.price,
            bedrooms: self.number_of_bedrooms,
            bathrooms: self.number_of_bathrooms,
            land_size: self.land_size,
            property_type: self.property_type,
        }
    }
}

/// Listing response (create and update)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: i64,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    pub owner_id: Uuid,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.listing_id.into_uuid(),
            address: listing.address,
            city: listing.city,
            price: listing.price,
            number_of_bedrooms: listing.bedrooms,
            number_of_bathrooms: listing.bathrooms,
            land_size: listing.land_size,
            property_type: listing.property_type,
            owner_id: listing.owner_user_id.into_uuid(),
        }
    }
}
