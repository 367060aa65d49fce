//! Listing Search Filter
//!
//! Built per search call from raw query parameters and discarded after
//! use. Absent fields impose no condition.

use crate::domain::entity::listing::Listing;
use crate::domain::value_object::property_type::PropertyType;

/// Search conditions for listings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilter {
    /// Exact-match city condition
    pub city: Option<String>,
    /// Minimum price condition (greater-or-equal)
    pub min_price: Option<i64>,
    /// Property type condition
    pub property_type: Option<PropertyType>,
}

impl ListingFilter {
    /// Build a filter from raw query parameters
    ///
    /// `min_price` and `property_type` that fail to parse impose no
    /// condition, as does an empty `city`.
    pub fn from_params(
        city: Option<String>,
        min_price: Option<String>,
        property_type: Option<String>,
    ) -> Self {
        Self {
            city: city.filter(|c| !c.trim().is_empty()),
            min_price: min_price.and_then(|p| p.trim().parse::<i64>().ok()),
            property_type: property_type.and_then(|p| p.parse::<PropertyType>().ok()),
        }
    }

    /// True when no condition is set (match-all)
    pub fn is_match_all(&self) -> bool {
        self.city.is_none() && self.min_price.is_none() && self.property_type.is_none()
    }

    /// Whether a listing satisfies every set condition
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(city) = &self.city {
            if listing.city != *city {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if listing.price < min_price {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }
        true
    }
}
