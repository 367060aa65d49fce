//! Listing Entities
//!
//! The Listing aggregate, its photo references, and the projections the
//! store returns for search and detail views.

use chrono::{DateTime, Utc};
use kernel::id::{ListingId, PhotoId, UserId};

use crate::domain::value_object::property_type::PropertyType;

/// Listing entity
///
/// Bound to its owning user at creation; only the owner may mutate it.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Internal UUID identifier, assigned on creation
    pub listing_id: ListingId,
    /// Street address
    pub address: String,
    /// City (exact-match searchable)
    pub city: String,
    /// Price as an opaque integer
    pub price: i64,
    /// Number of bedrooms
    pub bedrooms: i32,
    /// Number of bathrooms (half baths allowed)
    pub bathrooms: f64,
    /// Land size
    pub land_size: f64,
    /// Property type
    pub property_type: PropertyType,
    /// Owning user (realtor/admin)
    pub owner_user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Create a new listing bound to its owner
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_user_id: UserId,
        address: String,
        city: String,
        price: i64,
        bedrooms: i32,
        bathrooms: f64,
        land_size: f64,
        property_type: PropertyType,
    ) -> Self {
        let now = Utc::now();

        Self {
            listing_id: ListingId::new(),
            address,
            city,
            price,
            bedrooms,
            bathrooms,
            land_size,
            property_type,
            owner_user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given user owns this listing
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_user_id == *user_id
    }
}

/// Photo reference belonging to a listing
///
/// Only the URL is stored, never image bytes. `position` preserves the
/// order photos were submitted in.
#[derive(Debug, Clone)]
pub struct PhotoRef {
    pub photo_id: PhotoId,
    pub listing_id: ListingId,
    pub url: String,
    pub position: i32,
}

/// Sparse update payload
///
/// `None` means "leave the field untouched"; a present value replaces the
/// stored one. Field presence drives the merge, matching the partial
/// update semantics of the HTTP surface.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub address: Option<String>,
    pub city: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<f64>,
    pub land_size: Option<f64>,
    pub property_type: Option<PropertyType>,
}

impl ListingPatch {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.city.is_none()
            && self.price.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.land_size.is_none()
            && self.property_type.is_none()
    }

    /// Apply present fields onto a listing, leaving the rest untouched
    pub fn apply_to(&self, listing: &mut Listing) {
        if let Some(address) = &self.address {
            listing.address = address.clone();
        }
        if let Some(city) = &self.city {
            listing.city = city.clone();
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(bedrooms) = self.bedrooms {
            listing.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            listing.bathrooms = bathrooms;
        }
        if let Some(land_size) = self.land_size {
            listing.land_size = land_size;
        }
        if let Some(property_type) = self.property_type {
            listing.property_type = property_type;
        }
        listing.updated_at = Utc::now();
    }
}

/// Search projection
///
/// Excludes the full photo list; carries at most one photo URL as a
/// thumbnail.
#[derive(Debug, Clone)]
pub struct ListingSummary {
    pub listing_id: ListingId,
    pub address: String,
    pub city: String,
    pub price: i64,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    pub cover_photo_url: Option<String>,
}

/// Owner contact fields exposed on the detail view
///
/// Never includes the password hash.
#[derive(Debug, Clone)]
pub struct OwnerContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Detail projection: the full listing, all photos in order, and the
/// owner's public contact fields
#[derive(Debug, Clone)]
pub struct ListingDetail {
    pub listing: Listing,
    pub photos: Vec<PhotoRef>,
    pub owner: OwnerContact,
}
