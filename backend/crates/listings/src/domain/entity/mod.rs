//! Entity Module

pub mod listing;

pub use listing::{Listing, ListingDetail, ListingPatch, ListingSummary, OwnerContact, PhotoRef};
